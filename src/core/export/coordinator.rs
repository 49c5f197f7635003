//! Export coordinator
//!
//! Takes a snapshot of every submission, newest first, encodes it and stages
//! the artifact in the output directory.

use super::dispatcher::{export, ExportOutcome};
use super::staging::stage_artifact;
use super::summary::ExportSummary;
use crate::adapters::database::RecordStore;
use crate::domain::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    store: Arc<dyn RecordStore + Send + Sync>,
    output_dir: PathBuf,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_dir: output_dir.into(),
        }
    }

    /// Directory artifacts are written to
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Execute the export
    ///
    /// An unrecognised format yields a summary with no staged artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, a record cannot be
    /// encoded, or the artifact cannot be written.
    pub async fn execute_export(&self, format_name: &str) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new(format_name.trim());

        let records = self.store.list_submissions().await?;
        summary.record_count = records.len();

        match export(format_name, &records)? {
            ExportOutcome::Exported(artifact) => {
                summary.staged = Some(stage_artifact(&artifact, &self.output_dir)?);
            }
            ExportOutcome::Unsupported(_) => {}
        }

        Ok(summary.with_duration(start_time.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::NewSubmission;
    use tempfile::TempDir;

    async fn store_with(names: &[&str]) -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        for name in names {
            let new = NewSubmission::builder()
                .full_name(*name)
                .business_name("Okafor Prints")
                .email("hello@okafor.ng")
                .whatsapp_number("+2348030000000")
                .country("Nigeria")
                .plan_selected("Pro")
                .build()
                .unwrap();
            store.create_submission(new).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_export_writes_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with(&["Ada", "Bola"]).await;
        let coordinator = ExportCoordinator::new(store, temp_dir.path());

        let summary = coordinator.execute_export("json").await.unwrap();
        let staged = summary.staged.as_ref().unwrap();
        assert_eq!(summary.record_count, 2);

        let bytes = std::fs::read(&staged.path).unwrap();
        let records = crate::core::export::decode_structured(&bytes).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bola", "Ada"]);
    }

    #[tokio::test]
    async fn test_unsupported_format_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("exports");
        let coordinator = ExportCoordinator::new(store_with(&["Ada"]).await, &output_dir);

        let summary = coordinator.execute_export("xml").await.unwrap();
        assert!(summary.is_unsupported());
        assert!(!output_dir.exists());
    }
}
