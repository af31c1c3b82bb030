//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: {value}")]
    InvalidValue {
        variable: &'static str,
        value: String,
    },
}
