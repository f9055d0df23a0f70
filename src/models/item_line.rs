//! Item line model for the SDK

use serde::{Deserialize, Serialize};

/// A quantity of a specific item within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemLine {
    /// Item id
    pub item_id: u32,
    /// Quantity ordered; an absent quantity is treated as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ItemLine {
    /// Create a new item line with an explicit quantity
    pub fn new(item_id: u32, quantity: u32) -> Self {
        Self {
            item_id,
            quantity: Some(quantity),
        }
    }
}
