//! Record store factory
//!
//! This module creates the configured record store backend.

use crate::adapters::database::traits::RecordStore;
use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{DatabaseTarget, WhatsFlowConfig};
use crate::domain::{Result, WhatsFlowError};
use std::sync::Arc;

/// Create a record store based on the configuration
///
/// This factory function examines the `database_target` in the configuration
/// and creates the appropriate implementation.
///
/// # Errors
///
/// Returns an error if the PostgreSQL section is missing or the client cannot
/// be created
pub async fn create_record_store(
    config: &WhatsFlowConfig,
) -> Result<Arc<dyn RecordStore + Send + Sync>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                WhatsFlowError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL record store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            let adapter = PostgreSQLAdapter::new(client);

            Ok(Arc::new(adapter) as Arc<dyn RecordStore + Send + Sync>)
        }
        DatabaseTarget::Memory => {
            tracing::warn!("Using in-memory record store; data is lost on exit");
            Ok(Arc::new(InMemoryStore::new()) as Arc<dyn RecordStore + Send + Sync>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        ApplicationConfig, Environment, ExportConfig, LoggingConfig, NotificationConfig,
    };

    fn config(target: DatabaseTarget) -> WhatsFlowConfig {
        WhatsFlowConfig {
            application: ApplicationConfig::default(),
            environment: Environment::Development,
            database_target: target,
            postgresql: None,
            export: ExportConfig::default(),
            notifications: NotificationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_memory_target() {
        let store = create_record_store(&config(DatabaseTarget::Memory))
            .await
            .unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.test_connection().await.is_ok());
    }

    #[tokio::test]
    async fn test_postgresql_target_requires_section() {
        let result = create_record_store(&config(DatabaseTarget::PostgreSQL)).await;
        assert!(matches!(result, Err(WhatsFlowError::Configuration(_))));
    }
}
