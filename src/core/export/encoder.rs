//! Encoder capability shared by every export format

use super::delimited::DelimitedEncoder;
use super::format::ExportFormat;
use super::paginated::PaginatedEncoder;
use super::spreadsheet::SpreadsheetEncoder;
use super::structured::StructuredEncoder;
use super::word::WordEncoder;
use crate::domain::{EncodingError, Submission};

/// Title printed at the top of document formats
pub const REPORT_TITLE: &str = "WhatsFlow Submissions";

/// Renders an ordered record set into one output format
///
/// Implementations never reorder records and never mutate them. `encode` is
/// all-or-nothing: on error no payload exists.
pub trait SubmissionEncoder: Send + Sync {
    /// Format key this encoder serves
    fn format(&self) -> ExportFormat;

    /// Download file name, including extension
    fn file_name(&self) -> &'static str;

    /// MIME type of the payload
    fn mime_type(&self) -> &'static str;

    /// Encodes `records` in order
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::InvalidRecord`] when a record cannot be
    /// rendered and [`EncodingError::Writer`] when the format writer fails.
    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError>;
}

/// Looks up the encoder for a format
pub fn encoder_for(format: ExportFormat) -> &'static dyn SubmissionEncoder {
    match format {
        ExportFormat::Csv => &DelimitedEncoder,
        ExportFormat::Json => &StructuredEncoder,
        ExportFormat::Excel => &SpreadsheetEncoder,
        ExportFormat::Pdf => &PaginatedEncoder,
        ExportFormat::Word => &WordEncoder,
    }
}
