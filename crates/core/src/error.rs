//! Core error types for the Delta Studio site.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for site logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Carousel errors
    #[error("carousel needs at least one item")]
    EmptyCarousel,

    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("auto-play interval must be greater than zero")]
    InvalidInterval,

    // Gallery errors
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    // Configuration errors
    #[error("{format} parse error: {reason}")]
    ConfigParseFailed { format: &'static str, reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create an out-of-range error.
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an unknown category error.
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory(category.into())
    }

    /// Create a configuration parse error.
    pub fn config_parse_failed(format: &'static str, reason: impl Into<String>) -> Self {
        Self::ConfigParseFailed {
            format,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::index_out_of_range(7, 5).to_string(),
            "index 7 is out of range for 5 items"
        );
        assert_eq!(
            Error::unknown_category("נעליים").to_string(),
            "unknown category: נעליים"
        );
        assert_eq!(
            Error::config_parse_failed("TOML", "expected `=`").to_string(),
            "TOML parse error: expected `=`"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = Error::EmptyCarousel;
        assert_eq!(error.clone(), error);
    }
}
