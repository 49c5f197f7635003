//! Domain error types
//!
//! This module defines the error hierarchy for WhatsFlow. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main WhatsFlow error type
///
/// This is the primary error type used throughout the application.
/// Unsupported export formats are deliberately absent: the dispatcher reports
/// them as an outcome, not as a failure.
#[derive(Debug, Error)]
pub enum WhatsFlowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// Caller supplied a value outside the allowed domain
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown submission or plan identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// An encoder could not render the record set
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Reasons an export encoder refuses to produce a payload
///
/// Encoders fail atomically: when one of these is returned no bytes were
/// handed back to the caller.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A single record cannot be represented in the target format
    #[error("submission {submission_id} cannot be rendered: {reason}")]
    InvalidRecord {
        /// Identifier of the offending submission
        submission_id: i64,
        /// Human readable reason
        reason: String,
    },

    /// The underlying format writer failed
    #[error("{format} writer failed: {message}")]
    Writer {
        /// Format key of the encoder that failed
        format: &'static str,
        /// Message reported by the writer
        message: String,
    },
}

impl EncodingError {
    /// Creates an [`EncodingError::InvalidRecord`]
    pub fn invalid_record(submission_id: i64, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            submission_id,
            reason: reason.into(),
        }
    }

    /// Creates an [`EncodingError::Writer`] from any displayable writer error
    pub fn writer(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Writer {
            format,
            message: err.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for WhatsFlowError {
    fn from(err: std::io::Error) -> Self {
        WhatsFlowError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for WhatsFlowError {
    fn from(err: serde_json::Error) -> Self {
        WhatsFlowError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for WhatsFlowError {
    fn from(err: toml::de::Error) -> Self {
        WhatsFlowError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WhatsFlowError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");

        let err = WhatsFlowError::NotFound("submission 7".to_string());
        assert_eq!(err.to_string(), "Not found: submission 7");
    }

    #[test]
    fn test_encoding_error_conversion() {
        let encoding = EncodingError::invalid_record(42, "creation year out of range");
        let err: WhatsFlowError = encoding.into();
        assert!(matches!(err, WhatsFlowError::Encoding(_)));
        assert_eq!(
            err.to_string(),
            "Encoding error: submission 42 cannot be rendered: creation year out of range"
        );
    }

    #[test]
    fn test_writer_error_message() {
        let err = EncodingError::writer("excel", "string too long");
        assert_eq!(err.to_string(), "excel writer failed: string too long");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: WhatsFlowError = io_err.into();
        assert!(matches!(err, WhatsFlowError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: WhatsFlowError = json_err.into();
        assert!(matches!(err, WhatsFlowError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: WhatsFlowError = toml_err.into();
        assert!(matches!(err, WhatsFlowError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = WhatsFlowError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = EncodingError::writer("pdf", "boom");
        let _: &dyn std::error::Error = &err;
    }
}
