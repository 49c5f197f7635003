//! Logging and observability
//!
//! Structured `tracing` logging with:
//! - Console output filtered by level (overridable with `RUST_LOG`)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use whatsflow::logging::init_logging;
//! use whatsflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an export
///
/// # Example
///
/// ```no_run
/// use whatsflow::log_export_start;
///
/// log_export_start!("csv", 12);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($format:expr, $count:expr) => {
        tracing::info!(
            format = %$format,
            record_count = $count,
            "Starting export"
        );
    };
}

/// Log the completion of an export
///
/// # Example
///
/// ```no_run
/// use whatsflow::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("pdf", 42, 18_230, Duration::from_millis(35));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($format:expr, $count:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            format = %$format,
            record_count = $count,
            bytes = $bytes,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use whatsflow::log_error_with_context;
/// use whatsflow::domain::WhatsFlowError;
///
/// let error = WhatsFlowError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::WhatsFlowError;
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_export_start!("json", 3usize);
        log_export_complete!("json", 3usize, 512usize, Duration::from_millis(4));
        let error = WhatsFlowError::Validation("bad".to_string());
        log_error_with_context!(&error, "while testing");
    }
}
