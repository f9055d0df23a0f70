//! Report command implementation

use crate::analytics::{average_items_per_order, average_order_amount, most_expensive_purchase};
use crate::cli::error::CliError;
use crate::cli::output::format_report;
use crate::dataset::{Dataset, sample_dataset};
use std::io::Read;
use std::path::PathBuf;

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        // Read from stdin
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        // Read from file
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load the dataset for a report: a file or stdin document when an
/// input is given, the built-in sample otherwise
fn load_dataset(format: &str, input: Option<&str>) -> Result<Dataset, CliError> {
    let Some(input) = input else {
        return Ok(sample_dataset().clone());
    };

    let content = load_input(input)?;
    match format {
        "json" => Ok(Dataset::from_json(&content)?),
        "yaml" => Ok(Dataset::from_yaml(&content)?),
        _ => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}",
            format
        ))),
    }
}

/// Handle the report command
pub fn handle_report(format: &str, input: Option<&str>, customer_id: u32) -> Result<(), CliError> {
    let dataset = load_dataset(format, input)?;
    let customers = dataset.customers();

    let most_expensive = most_expensive_purchase(customer_id, customers)?;
    let average_amount = average_order_amount(customer_id, customers)?;
    let average_items = average_items_per_order(customers);

    print!(
        "{}",
        format_report(customer_id, most_expensive, average_amount, average_items)
    );
    Ok(())
}
