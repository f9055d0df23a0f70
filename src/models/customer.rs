//! Customer model for the SDK

use super::order::Order;
use serde::{Deserialize, Serialize};

/// Customer record owning a sequence of orders
///
/// A customer is identified by a numeric id, unique within a dataset.
/// The `orders` field mirrors the source data directly: `None` means the
/// record carried no usable orders sequence. The per-customer queries
/// reject such customers; the fleet-wide query skips them.
///
/// # Example
///
/// ```rust
/// use order_analytics_sdk::models::Customer;
///
/// let customer = Customer::new(1, "Customer A".to_string(),
///     "customer_a@example.com".to_string(), Vec::new());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Customer id (unique within a dataset)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Orders owned by this customer, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
}

impl Customer {
    /// Create a new customer with the given orders
    pub fn new(id: u32, name: String, email: String, orders: Vec<Order>) -> Self {
        Self {
            id,
            name,
            email,
            orders: Some(orders),
        }
    }

    /// Create a customer record without an orders sequence
    pub fn without_orders(id: u32, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            orders: None,
        }
    }
}
