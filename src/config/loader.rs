//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DatabaseTarget, Environment, PostgreSQLConfig, WhatsFlowConfig};
use super::secret::secret_string;
use crate::domain::errors::WhatsFlowError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into WhatsFlowConfig
/// 4. Applies environment variable overrides (WHATSFLOW_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use whatsflow::config::loader::load_config;
///
/// let config = load_config("whatsflow.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WhatsFlowConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WhatsFlowError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        WhatsFlowError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses, overrides and validates configuration from TOML text
///
/// # Errors
///
/// Same as [`load_config`], minus the file access failures.
pub fn parse_config(contents: &str) -> Result<WhatsFlowConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: WhatsFlowConfig = toml::from_str(&contents)
        .map_err(|e| WhatsFlowError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        WhatsFlowError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| WhatsFlowError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(WhatsFlowError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using WHATSFLOW_* prefix
///
/// Environment variables follow the pattern: WHATSFLOW_<SECTION>_<KEY>
/// For example: WHATSFLOW_POSTGRESQL_CONNECTION_STRING, WHATSFLOW_EXPORT_OUTPUT_DIR
fn apply_env_overrides(config: &mut WhatsFlowConfig) -> Result<()> {
    // Top-level overrides
    if let Ok(val) = std::env::var("WHATSFLOW_ENVIRONMENT") {
        config.environment = parse_enum::<Environment>("WHATSFLOW_ENVIRONMENT", &val)?;
    }
    if let Ok(val) = std::env::var("WHATSFLOW_DATABASE_TARGET") {
        config.database_target = parse_enum::<DatabaseTarget>("WHATSFLOW_DATABASE_TARGET", &val)?;
    }

    // Application overrides
    if let Ok(val) = std::env::var("WHATSFLOW_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // PostgreSQL overrides; a connection string alone is enough to create the section
    if let Ok(val) = std::env::var("WHATSFLOW_POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(PostgreSQLConfig {
                    connection_string: secret_string(val),
                    max_connections: 10,
                    connection_timeout_seconds: 30,
                    statement_timeout_seconds: 60,
                    ssl_mode: "prefer".to_string(),
                })
            }
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Ok(val) = std::env::var("WHATSFLOW_POSTGRESQL_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                pg.max_connections = max;
            }
        }
        if let Ok(val) = std::env::var("WHATSFLOW_POSTGRESQL_SSL_MODE") {
            pg.ssl_mode = val;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("WHATSFLOW_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("WHATSFLOW_EXPORT_DEFAULT_FORMAT") {
        config.export.default_format = val;
    }

    // Notification overrides
    if let Ok(val) = std::env::var("WHATSFLOW_NOTIFICATIONS_ENABLED") {
        config.notifications.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("WHATSFLOW_NOTIFICATIONS_ADMIN_EMAIL") {
        config.notifications.admin_email = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("WHATSFLOW_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("WHATSFLOW_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Parses a lowercase enum value the same way the TOML file would
fn parse_enum<T: serde::de::DeserializeOwned>(var: &str, value: &str) -> Result<T> {
    T::deserialize(toml::Value::String(value.trim().to_lowercase())).map_err(|e| {
        WhatsFlowError::Configuration(format!("Invalid value '{value}' for {var}: {e}"))
    })
}
