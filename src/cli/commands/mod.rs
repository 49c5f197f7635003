//! CLI command implementations
//!
//! Every command returns a process exit code: 0 success, 2 configuration or
//! validation error, 4 store connection error, 5 fatal error.

pub mod dashboard;
pub mod export;
pub mod init;
pub mod migrate;
pub mod pricing;
pub mod submissions;
pub mod submit;
pub mod update_status;
pub mod validate;

use crate::adapters::database::{create_record_store, RecordStore};
use crate::config::{load_config, WhatsFlowConfig};
use crate::domain::WhatsFlowError;
use std::sync::Arc;

/// Configuration plus a connected record store
pub(crate) struct CommandContext {
    pub config: WhatsFlowConfig,
    pub store: Arc<dyn RecordStore + Send + Sync>,
}

impl CommandContext {
    /// Loads the configuration and connects to the store
    ///
    /// On failure the problem has been printed and the exit code is returned.
    pub async fn open(config_path: &str) -> Result<Self, i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Err(2);
            }
        };

        let store = match create_record_store(&config).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create record store");
                println!("❌ Failed to connect to the record store");
                println!("   Error: {e}");
                return Err(exit_code_for(&e));
            }
        };

        if let Err(e) = store.test_connection().await {
            tracing::error!(error = %e, backend = store.backend_name(), "Connection test failed");
            println!("❌ Failed to connect to the record store");
            println!("   Error: {e}");
            return Err(4);
        }

        Ok(Self { config, store })
    }
}

/// Maps a library error to the command exit code
pub fn exit_code_for(error: &WhatsFlowError) -> i32 {
    match error {
        WhatsFlowError::Configuration(_)
        | WhatsFlowError::Validation(_)
        | WhatsFlowError::NotFound(_) => 2,
        WhatsFlowError::Database(_) => 4,
        WhatsFlowError::Encoding(_)
        | WhatsFlowError::Serialization(_)
        | WhatsFlowError::Io(_)
        | WhatsFlowError::Other(_) => 5,
    }
}

/// Reports a failed operation and returns its exit code
pub(crate) fn report_failure(action: &str, error: &WhatsFlowError) -> i32 {
    tracing::error!(error = %error, action, "Command failed");
    println!("❌ {action} failed: {error}");
    exit_code_for(error)
}
