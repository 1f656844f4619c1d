//! Error types for analytics processing.
//!
//! The numeric core (interpolation, merging, stint metrics) never fails: degenerate
//! input produces empty output or `None` metrics. Errors only appear at the
//! boundaries where backend payloads are decoded, fixtures are read from disk or
//! configuration is loaded.
//!
//! ## Error Categories
//!
//! - **Decode Errors**: Backend JSON that does not match the expected shape
//! - **File Errors**: Problems reading fixture or configuration files
//! - **Lookup Errors**: Requested session, driver or lap has no data
//! - **Input Errors**: Unknown telemetry channels, table columns or lap selectors,
//!   and comparisons that mix two channels
//! - **Source Errors**: Failures reported by a [`TelemetrySource`](crate::TelemetrySource)
//!
//! ## Recovery and Retry
//!
//! ```rust
//! use slipstream::AnalyticsError;
//!
//! let error = AnalyticsError::source_failed("backend returned 503");
//! if error.is_retryable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::types::Channel;

/// Result type alias for analytics operations.
pub type Result<T, E = AnalyticsError> = std::result::Result<T, E>;

/// Main error type for analytics operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalyticsError {
    #[error("Decode error in {context}: {details}")]
    Decode { context: String, details: String },

    #[error("Fixture file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No data available for {resource}")]
    NotFound { resource: String },

    #[error("Unknown telemetry channel '{name}'")]
    UnknownChannel { name: String },

    #[error("Invalid lap selector '{input}': expected \"fastest\" or a lap number")]
    InvalidLapSelector { input: String },

    #[error("Unknown stint table column '{name}'")]
    UnknownColumn { name: String },

    #[error("Cannot compare {channel_a} against {channel_b}")]
    ChannelMismatch { channel_a: Channel, channel_b: Channel },

    #[error("Configuration error: {details}")]
    Config { details: String },

    #[error("Telemetry source failed: {reason}")]
    Source {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalyticsError {
    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalyticsError::Source { .. } => true,
            AnalyticsError::File { .. } => false,
            AnalyticsError::Decode { .. } => false,
            AnalyticsError::NotFound { .. } => false,
            AnalyticsError::UnknownChannel { .. } => false,
            AnalyticsError::InvalidLapSelector { .. } => false,
            AnalyticsError::UnknownColumn { .. } => false,
            AnalyticsError::ChannelMismatch { .. } => false,
            AnalyticsError::Config { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            AnalyticsError::Decode { .. } => vec![
                "Check the backend API version",
                "Verify the payload matches the expected JSON shape",
            ],
            AnalyticsError::File { .. } => vec![
                "Check the fixture directory exists and is readable",
                "Verify the year/event/session path components",
            ],
            AnalyticsError::NotFound { .. } => vec![
                "Check the driver took part in the session",
                "Request a lap number returned by the lap listing",
                "Use the fastest lap selector",
            ],
            AnalyticsError::UnknownChannel { .. } => vec![
                "Use one of speed, throttle, brake, rpm, gear, drs",
                "Check channel name spelling",
            ],
            AnalyticsError::InvalidLapSelector { .. } => {
                vec!["Pass \"fastest\" or a 1-based lap number"]
            }
            AnalyticsError::UnknownColumn { .. } => vec![
                "Use one of driver, stintLength, fastestLap, avgLapTime, consistency, degradation",
            ],
            AnalyticsError::ChannelMismatch { .. } => {
                vec!["Request the same channel for both drivers"]
            }
            AnalyticsError::Config { .. } => vec![
                "Check the configuration file is valid YAML",
                "Remove unknown keys or fix value types",
            ],
            AnalyticsError::Source { .. } => vec![
                "Retry the request",
                "Check the backend service is reachable",
            ],
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        AnalyticsError::File { path, source }
    }

    /// Helper constructor for decode errors.
    pub fn decode(context: impl Into<String>, details: impl Into<String>) -> Self {
        AnalyticsError::Decode { context: context.into(), details: details.into() }
    }

    /// Helper constructor for missing data.
    pub fn not_found(resource: impl Into<String>) -> Self {
        AnalyticsError::NotFound { resource: resource.into() }
    }

    /// Helper constructor for source failures.
    pub fn source_failed(reason: impl Into<String>) -> Self {
        AnalyticsError::Source { reason: reason.into(), source: None }
    }

    /// Helper constructor for source failures with an underlying cause.
    pub fn source_failed_with(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        AnalyticsError::Source { reason: reason.into(), source: Some(source) }
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        AnalyticsError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Decode { context: "JSON payload".to_string(), details: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_messages_carry_their_context(
                context in "[a-z ]{1,20}",
                details in ".*",
                name in "\\w+",
                input in "\\w*",
            ) {
                let decode = AnalyticsError::decode(context.clone(), details.clone());
                let channel = AnalyticsError::UnknownChannel { name: name.clone() };
                let lap = AnalyticsError::InvalidLapSelector { input: input.clone() };

                let decode_msg = decode.to_string();
                prop_assert!(decode_msg.contains(&context));
                prop_assert!(decode_msg.contains(&details));
                prop_assert!(channel.to_string().contains(&name));
                prop_assert!(lap.to_string().contains(&input));
            }

            #[test]
            fn io_errors_convert_to_file_variant(reason in ".*") {
                let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, reason.clone());
                let converted: AnalyticsError = io_err.into();
                match converted {
                    AnalyticsError::File { source, .. } => {
                        prop_assert_eq!(source.to_string(), reason);
                    }
                    _ => prop_assert!(false, "Expected File error from io::Error conversion"),
                }
            }
        }
    }

    #[test]
    fn json_errors_convert_to_decode_variant() {
        let err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let converted: AnalyticsError = err.into();
        assert!(matches!(converted, AnalyticsError::Decode { .. }));
    }

    #[test]
    fn source_errors_chain_their_cause() {
        let cause = std::io::Error::other("connection reset");
        let err = AnalyticsError::source_failed_with("fetch speed", Box::new(cause));
        let source = std::error::Error::source(&err).expect("source should be preserved");
        assert!(source.to_string().contains("connection reset"));
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<AnalyticsError>();
    }

    #[test]
    fn input_errors_are_not_retryable() {
        let column = AnalyticsError::UnknownColumn { name: "pitStops".to_string() };
        let mismatch =
            AnalyticsError::ChannelMismatch { channel_a: Channel::Speed, channel_b: Channel::Rpm };

        assert!(column.to_string().contains("pitStops"));
        assert!(!column.is_retryable());
        assert!(!mismatch.is_retryable());
        assert!(!mismatch.recovery_suggestions().is_empty());
    }

    #[test]
    fn recovery_methods_work() {
        let source = AnalyticsError::source_failed("timeout");
        let missing = AnalyticsError::not_found("VER lap 12");

        assert!(source.is_retryable());
        assert!(!missing.is_retryable());

        for err in [&source, &missing] {
            let suggestions = err.recovery_suggestions();
            assert!(!suggestions.is_empty());
            assert!(suggestions.iter().all(|s| s.len() > 5));
        }
    }
}
