//! Fleet-wide order item statistics

use crate::models::Customer;
use tracing::debug;

/// Average number of items per order across all customers
///
/// Customers without an orders sequence are skipped without error.
/// Returns 0.0 when no orders were counted at all.
pub fn average_items_per_order(customers: &[Customer]) -> f64 {
    let mut total_orders: u64 = 0;
    let mut total_items: u64 = 0;

    for customer in customers {
        let Some(orders) = customer.orders.as_deref() else {
            debug!("Customer {} has no orders sequence, skipping", customer.id);
            continue;
        };

        total_orders += orders.len() as u64;
        for order in orders {
            total_items += order.item_count();
        }
    }

    if total_orders == 0 {
        return 0.0;
    }
    total_items as f64 / total_orders as f64
}
