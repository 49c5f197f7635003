//! Staging export artifacts to disk
//!
//! The payload is written to a temporary file inside the target directory and
//! renamed over `<output_dir>/<file_name>` only once fully written. A failed
//! write leaves nothing behind.

use super::dispatcher::ExportArtifact;
use super::format::ExportFormat;
use crate::domain::{Result, WhatsFlowError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// An artifact persisted under its final name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedExport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub size: usize,
    pub checksum: String,
}

/// Writes `artifact` into `output_dir`, replacing any previous file of the same name
///
/// # Errors
///
/// Returns [`WhatsFlowError::Io`] if the directory cannot be created or the
/// file cannot be written or renamed.
pub fn stage_artifact(artifact: &ExportArtifact, output_dir: &Path) -> Result<StagedExport> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        WhatsFlowError::Io(format!(
            "Failed to create export directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let mut staging = NamedTempFile::new_in(output_dir)?;
    staging.write_all(artifact.payload())?;
    staging.as_file().sync_all()?;

    let target = output_dir.join(artifact.file_name());
    staging.persist(&target).map_err(|e| {
        WhatsFlowError::Io(format!("Failed to persist {}: {}", target.display(), e.error))
    })?;

    tracing::debug!(path = %target.display(), bytes = artifact.size(), "Export staged");

    Ok(StagedExport {
        format: artifact.format(),
        path: target,
        size: artifact.size(),
        checksum: artifact.checksum(),
    })
}
