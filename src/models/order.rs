//! Order model for the SDK

use super::item_line::ItemLine;
use serde::{Deserialize, Serialize};

/// A purchase event with a total amount and line items
///
/// Owned by exactly one customer. `item_lines` is `None` when the source
/// record carried no line detail; such an order contributes 0 items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    pub order_id: u32,
    /// Total purchase amount (non-negative)
    pub amount: f64,
    /// Item lines of this order, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_lines: Option<Vec<ItemLine>>,
}

impl Order {
    /// Create a new order with the given item lines
    pub fn new(order_id: u32, amount: f64, item_lines: Vec<ItemLine>) -> Self {
        Self {
            order_id,
            amount,
            item_lines: Some(item_lines),
        }
    }

    /// Create an order record without an item line sequence
    pub fn without_item_lines(order_id: u32, amount: f64) -> Self {
        Self {
            order_id,
            amount,
            item_lines: None,
        }
    }

    /// Number of items in this order: the sum of its line quantities
    ///
    /// A line without a quantity counts as 0, and an order without an
    /// item line sequence has 0 items.
    pub fn item_count(&self) -> u64 {
        match &self.item_lines {
            Some(lines) => lines
                .iter()
                .map(|line| u64::from(line.quantity.unwrap_or(0)))
                .sum(),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_sums_quantities() {
        let order = Order::new(201, 300.0, vec![ItemLine::new(1003, 1), ItemLine::new(2001, 2)]);

        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_item_count_missing_quantity_is_zero() {
        let order = Order::new(
            301,
            10.0,
            vec![
                ItemLine::new(1, 4),
                ItemLine {
                    item_id: 2,
                    quantity: None,
                },
            ],
        );

        assert_eq!(order.item_count(), 4);
    }

    #[test]
    fn test_item_count_missing_lines_is_zero() {
        let order = Order::without_item_lines(302, 99.0);

        assert_eq!(order.item_count(), 0);
    }
}
