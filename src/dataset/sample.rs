//! Built-in sample dataset
//!
//! A small fixed dataset of two customers, held in a static so it is
//! constructed once and shared read-only for the lifetime of the
//! process.

use super::Dataset;
use crate::models::{Customer, ItemLine, Order};
use once_cell::sync::Lazy;

static SAMPLE: Lazy<Dataset> = Lazy::new(build_sample);

/// The built-in demo dataset
pub fn sample_dataset() -> &'static Dataset {
    &SAMPLE
}

fn build_sample() -> Dataset {
    Dataset::new(vec![
        Customer::new(
            1,
            "Customer A".to_string(),
            "customer_a@example.com".to_string(),
            vec![
                Order::new(
                    101,
                    250.0,
                    vec![ItemLine::new(1001, 2), ItemLine::new(1002, 1)],
                ),
                Order::new(102, 150.0, vec![ItemLine::new(1003, 1)]),
            ],
        ),
        Customer::new(
            2,
            "Customer B".to_string(),
            "customer_b@example.com".to_string(),
            vec![Order::new(
                201,
                300.0,
                vec![ItemLine::new(1003, 1), ItemLine::new(2001, 2)],
            )],
        ),
    ])
}
