//! Structured error handling for the swap view core
//!
//! Only the configuration and route-table paths can fail. The summary
//! computation is total by design and never surfaces an error: a
//! missing or degenerate quote is a normal transient state, rendered as
//! placeholder strings instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapViewError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid setting '{field}' = {value}: {reason}")]
    InvalidSetting {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("Invalid route table: {0}")]
    RouteTable(String),
}

impl SwapViewError {
    /// Create an invalid setting error
    pub fn invalid_setting(field: &str, value: f64, reason: impl Into<String>) -> Self {
        SwapViewError::InvalidSetting {
            field: field.to_string(),
            value,
            reason: reason.into(),
        }
    }
}
