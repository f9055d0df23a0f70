//! Dataset functionality
//!
//! Provides the read-only in-memory customer collection:
//! - Construction from JSON or YAML documents
//! - Lookup accessors used by the analytics queries
//! - A built-in sample dataset (see [`sample`])

pub mod sample;

use crate::models::Customer;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use sample::sample_dataset;

/// Error while constructing a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A read-only collection of customer records
///
/// Constructed once at startup and only ever read afterwards: all
/// accessors take `&self` and the customers are never exposed mutably.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
    customers: Vec<Customer>,
}

impl Dataset {
    /// Create a dataset from an in-memory customer collection
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Parse a dataset from a JSON document (an array of customers)
    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let dataset: Self =
            serde_json::from_str(content).map_err(|e| DatasetError::ParseError(e.to_string()))?;
        info!("Loaded {} customers from JSON dataset", dataset.len());
        Ok(dataset)
    }

    /// Parse a dataset from a YAML document (a sequence of customers)
    pub fn from_yaml(content: &str) -> Result<Self, DatasetError> {
        let dataset: Self =
            serde_yaml::from_str(content).map_err(|e| DatasetError::ParseError(e.to_string()))?;
        info!("Loaded {} customers from YAML dataset", dataset.len());
        Ok(dataset)
    }

    /// All customers, in document order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Number of customers in the dataset
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the dataset contains no customers
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Find a customer by id (first match)
    pub fn find_customer(&self, customer_id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_customer_first_match() {
        let dataset = Dataset::new(vec![
            Customer::without_orders(1, "A".to_string(), "a@example.com".to_string()),
            Customer::without_orders(2, "B".to_string(), "b@example.com".to_string()),
        ]);

        assert_eq!(dataset.find_customer(2).map(|c| c.name.as_str()), Some("B"));
        assert!(dataset.find_customer(99).is_none());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let result = Dataset::from_json(r#"{"id": 1}"#);

        assert!(matches!(result, Err(DatasetError::ParseError(_))));
    }
}
