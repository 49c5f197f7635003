//! Export summary and reporting

use super::staging::StagedExport;
use std::time::Duration;

/// Summary of one export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Format name as requested by the caller
    pub requested_format: String,

    /// Number of submissions in the snapshot
    pub record_count: usize,

    /// Where the artifact landed; `None` when the format was not recognised
    pub staged: Option<StagedExport>,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a summary for a request that has not produced anything yet
    pub fn new(requested_format: impl Into<String>) -> Self {
        Self {
            requested_format: requested_format.into(),
            record_count: 0,
            staged: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the request was ignored as an unknown format
    pub fn is_unsupported(&self) -> bool {
        self.staged.is_none()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        match &self.staged {
            Some(staged) => tracing::info!(
                format = %staged.format,
                records = self.record_count,
                path = %staged.path.display(),
                bytes = staged.size,
                checksum = %staged.checksum,
                duration_ms = self.duration.as_millis(),
                "Export written"
            ),
            None => tracing::warn!(
                requested = %self.requested_format,
                "Export skipped: unsupported format"
            ),
        }
    }
}
