use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;

/// Unified error type for the planning core.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Session fetch failed: {0}")]
    SessionFetch(String),
    #[error("Logout failed: {0}")]
    Logout(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TripError>;

impl From<ConfigError> for TripError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TripError::ConfigError(io.to_string()),
            ConfigError::Serde(message) => TripError::ConfigError(message),
        }
    }
}
