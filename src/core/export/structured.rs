//! Structured-text (JSON) encoder and its decoder

use super::encoder::SubmissionEncoder;
use super::format::ExportFormat;
use super::schema::{prepare_rows, Column, DateStyle, ExportRow};
use crate::domain::{EncodingError, Submission, WhatsFlowError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// One exported submission as a field mapping
///
/// Field order matches the nine-column schema; `message` is `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub date: String,
    pub name: String,
    pub business: String,
    pub email: String,
    pub whatsapp: String,
    pub country: String,
    pub plan: String,
    pub message: Option<String>,
    pub status: String,
}

impl From<&ExportRow<'_>> for StructuredRecord {
    fn from(row: &ExportRow<'_>) -> Self {
        let cell = |c: Column| row.cell(c, DateStyle::Minute).into_owned();
        Self {
            date: cell(Column::Date),
            name: cell(Column::Name),
            business: cell(Column::Business),
            email: cell(Column::Email),
            whatsapp: cell(Column::WhatsApp),
            country: cell(Column::Country),
            plan: cell(Column::Plan),
            message: row.submission().message.clone(),
            status: cell(Column::Status),
        }
    }
}

/// JSON array with four-space indentation
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredEncoder;

impl SubmissionEncoder for StructuredEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn file_name(&self) -> &'static str {
        "submissions.json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError> {
        let documents: Vec<StructuredRecord> = prepare_rows(records)?
            .iter()
            .map(StructuredRecord::from)
            .collect();

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        documents
            .serialize(&mut serializer)
            .map_err(|e| EncodingError::writer("json", e))?;

        Ok(buf)
    }
}

/// Reads a payload produced by [`StructuredEncoder`]
///
/// # Errors
///
/// Returns [`WhatsFlowError::Serialization`] if the payload is not a JSON array
/// of exported records.
pub fn decode_structured(payload: &[u8]) -> Result<Vec<StructuredRecord>, WhatsFlowError> {
    Ok(serde_json::from_slice(payload)?)
}
