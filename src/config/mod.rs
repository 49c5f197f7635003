//! Configuration management for WhatsFlow.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! WhatsFlow uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `WHATSFLOW_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use whatsflow::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("whatsflow.toml")?;
//!
//! println!("Store: {:?}", config.database_target);
//! println!("Exports go to: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`PostgreSQLConfig`] - Connection pool and TLS settings
//! - [`ExportConfig`] - Output directory and default format
//! - [`NotificationConfig`] - New-submission notifications
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [postgresql]
//! connection_string = "${WHATSFLOW_DATABASE_URL}"
//! ssl_mode = "require"
//!
//! [export]
//! output_dir = "/var/lib/whatsflow/exports"
//! default_format = "excel"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, DatabaseTarget, Environment, ExportConfig, LoggingConfig,
    NotificationConfig, PostgreSQLConfig, WhatsFlowConfig,
};
pub use secret::{redact_connection_string, secret_string, SecretString, SecretValue};
