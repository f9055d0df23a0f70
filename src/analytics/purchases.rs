//! Per-customer purchase statistics

use super::AnalyticsError;
use crate::models::{Customer, Order};
use tracing::debug;

/// Look up a customer and return its non-empty orders sequence
///
/// Shared precondition of the per-customer queries: the customer must
/// exist and must carry at least one order.
fn orders_for_customer(
    customer_id: u32,
    customers: &[Customer],
) -> Result<&[Order], AnalyticsError> {
    let customer = customers
        .iter()
        .find(|customer| customer.id == customer_id)
        .ok_or_else(|| {
            AnalyticsError::InvalidInput(format!("No customer with id {}", customer_id))
        })?;

    match customer.orders.as_deref() {
        Some(orders) if !orders.is_empty() => Ok(orders),
        Some(_) => Err(AnalyticsError::InvalidInput(format!(
            "Customer {} has no orders",
            customer_id
        ))),
        None => Err(AnalyticsError::InvalidInput(format!(
            "Customer {} has no orders sequence",
            customer_id
        ))),
    }
}

/// Get the most expensive order for the given customer
///
/// Ties keep the first-encountered order: a later order replaces the
/// current maximum only on a strictly greater amount.
pub fn most_expensive_purchase(
    customer_id: u32,
    customers: &[Customer],
) -> Result<&Order, AnalyticsError> {
    let orders = orders_for_customer(customer_id, customers)?;

    // orders is non-empty here
    let mut max_order = &orders[0];
    for order in &orders[1..] {
        if order.amount > max_order.amount {
            max_order = order;
        }
    }

    debug!(
        "Most expensive order for customer {}: {} ({})",
        customer_id, max_order.order_id, max_order.amount
    );
    Ok(max_order)
}

/// Get the average order amount for the given customer
pub fn average_order_amount(
    customer_id: u32,
    customers: &[Customer],
) -> Result<f64, AnalyticsError> {
    let orders = orders_for_customer(customer_id, customers)?;

    let total: f64 = orders.iter().map(|order| order.amount).sum();

    // orders is non-empty here, the division cannot be 0/0
    Ok(total / orders.len() as f64)
}
