//! CLI error types

use crate::analytics::AnalyticsError;
use crate::dataset::DatasetError;
use std::path::PathBuf;

/// Error from a CLI command
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to read {}: {}", .0.display(), .1)]
    FileReadError(PathBuf, String),
    #[error("Dataset error: {0}")]
    DatasetError(#[from] DatasetError),
    #[error("Analytics error: {0}")]
    AnalyticsError(#[from] AnalyticsError),
}
