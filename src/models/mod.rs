//! Models module for the SDK
//!
//! Defines the nested customer order records the analytics queries
//! traverse. Entities are constructed once and never mutated.

pub mod customer;
pub mod item_line;
pub mod order;

pub use customer::Customer;
pub use item_line::ItemLine;
pub use order::Order;
