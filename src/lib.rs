//! Order Analytics SDK - Aggregate statistics over in-memory customer order data
//!
//! Provides:
//! - Nested record models (customers owning orders owning item lines)
//! - A read-only dataset loaded once at startup (JSON/YAML or built-in sample)
//! - Aggregate queries: most expensive order, average order amount,
//!   average items per order
//! - An optional CLI binary for printing a dataset report

pub mod analytics;
pub mod cli;
pub mod dataset;
pub mod models;

// Re-export commonly used types
pub use analytics::{
    AnalyticsError, average_items_per_order, average_order_amount, most_expensive_purchase,
};
pub use dataset::{Dataset, DatasetError, sample_dataset};
pub use models::{Customer, ItemLine, Order};
