//! Export dispatcher
//!
//! Resolves a format name to its encoder and runs it over a record snapshot.
//! An unknown format name is not a failure: the caller receives
//! [`ExportOutcome::Unsupported`] and is expected to do nothing.

use super::encoder::encoder_for;
use super::format::ExportFormat;
use crate::domain::{Result, Submission, WhatsFlowError};
use crate::{log_error_with_context, log_export_complete, log_export_start};
use sha2::{Digest, Sha256};
use std::str::FromStr;
use std::time::Instant;

/// A fully encoded export, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    format: ExportFormat,
    file_name: &'static str,
    mime_type: &'static str,
    record_count: usize,
    payload: Vec<u8>,
}

impl ExportArtifact {
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Number of records rendered into the payload
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Payload size in bytes
    pub fn size(&self) -> usize {
        self.payload.len()
    }

    /// Hex-encoded SHA-256 of the payload
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.payload);
        let result = hasher.finalize();
        format!("{result:x}")
    }
}

/// Result of a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The payload was produced
    Exported(ExportArtifact),
    /// The format name is not recognised; nothing was produced
    Unsupported(String),
}

impl ExportOutcome {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExportOutcome::Unsupported(_))
    }

    /// The artifact, if one was produced
    pub fn artifact(&self) -> Option<&ExportArtifact> {
        match self {
            ExportOutcome::Exported(artifact) => Some(artifact),
            ExportOutcome::Unsupported(_) => None,
        }
    }
}

/// Encodes `records` in the named format
///
/// Record order is preserved as given. The payload is built entirely in memory.
///
/// # Errors
///
/// Returns [`WhatsFlowError::Encoding`] when any record cannot be rendered; no
/// partial payload is returned in that case.
///
/// # Example
///
/// ```
/// use whatsflow::core::export::{export, ExportOutcome};
///
/// let outcome = export("CSV", &[]).unwrap();
/// let artifact = outcome.artifact().unwrap();
/// assert_eq!(artifact.file_name(), "submissions.csv");
///
/// assert!(export("xml", &[]).unwrap().is_unsupported());
/// ```
pub fn export(format_name: &str, records: &[Submission]) -> Result<ExportOutcome> {
    let format = match ExportFormat::from_str(format_name) {
        Ok(format) => format,
        Err(reason) => {
            tracing::warn!(requested = %format_name.trim(), %reason, "Ignoring export request");
            return Ok(ExportOutcome::Unsupported(format_name.trim().to_string()));
        }
    };

    let encoder = encoder_for(format);
    let start = Instant::now();
    log_export_start!(format, records.len());

    let payload = encoder.encode(records).map_err(|e| {
        tracing::debug!(%format, "Encoder rejected the record set");
        log_error_with_context!(&e, "Export encoding failed");
        WhatsFlowError::from(e)
    })?;

    log_export_complete!(format, records.len(), payload.len(), start.elapsed());

    Ok(ExportOutcome::Exported(ExportArtifact {
        format,
        file_name: encoder.file_name(),
        mime_type: encoder.mime_type(),
        record_count: records.len(),
        payload,
    }))
}
