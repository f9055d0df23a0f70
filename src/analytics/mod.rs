//! Analytics queries
//!
//! Provides the aggregate statistics over a customer dataset:
//! - Most expensive order for one customer
//! - Average order amount for one customer
//! - Average item count per order across all customers

pub mod items;
pub mod purchases;

pub use items::average_items_per_order;
pub use purchases::{average_order_amount, most_expensive_purchase};

/// Error during an analytics query
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
