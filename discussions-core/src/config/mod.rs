//! Client configuration
//!
//! Environment-based configuration for hosts that wire a real gateway:
//! where the configuration API lives, which course to operate on by
//! default, and how long to wait for a response. Everything has a
//! default so a bare environment still yields a usable config.

use crate::model::CourseId;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

mod error;

pub use error::ConfigError;

const DEFAULT_API_BASE: &str = "http://localhost:18010";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the discussions API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the configuration API
    pub api_base: String,

    /// Course to operate on when the caller does not name one
    pub course_id: Option<CourseId>,

    /// Per-request timeout for gateway calls
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            course_id: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment
    ///
    /// Recognized variables: `DISCUSSIONS_API_BASE`,
    /// `DISCUSSIONS_COURSE_ID`, `DISCUSSIONS_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = ClientConfig::default();

        if let Ok(api_base) = env::var("DISCUSSIONS_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(course_id) = env::var("DISCUSSIONS_COURSE_ID") {
            config.course_id = Some(CourseId::new(course_id));
        }
        if let Ok(raw) = env::var("DISCUSSIONS_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    variable: "DISCUSSIONS_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                }
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                variable: "DISCUSSIONS_API_BASE",
                value: self.api_base.clone(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                variable: "DISCUSSIONS_REQUEST_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
