//! Error types originating in the tracking core.

use thiserror::Error;

/// Raised by the identifier parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but separators and whitespace was submitted.
    #[error("no tracking numbers: enter at least one tracking number")]
    EmptyInput,
}

/// Raised by the batch tracker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The caller went away before the simulated lookup finished.
    #[error("tracking request cancelled before results were ready")]
    Cancelled,
}

/// Raised while reading runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Raw value as found in the environment.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue { key: key.to_string(), value: value.to_string(), reason: reason.into() }
    }
}
