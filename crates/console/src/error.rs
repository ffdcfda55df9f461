//! Console Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or navigating console state
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Failed to read dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset: {0}")]
    DatasetFormat(#[from] serde_json::Error),

    #[error("Unknown actor: {0}")]
    UnknownActor(String),

    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    #[error("Monitor {monitor} not found under customer {customer}")]
    UnknownMonitor { customer: String, monitor: String },

    #[error("No customer selected")]
    NoCustomerSelected,

    #[error("Failed to install log subscriber: {0}")]
    Logging(String),
}
