//! Submission export
//!
//! Five encoders share one column schema and one capability trait
//! ([`SubmissionEncoder`]). The [`export`] dispatcher picks an encoder from a
//! format name, and [`ExportCoordinator`] snapshots the store and stages the
//! result on disk.

pub mod coordinator;
pub mod delimited;
pub mod dispatcher;
pub mod encoder;
pub mod format;
pub mod paginated;
pub mod schema;
pub mod spreadsheet;
pub mod staging;
pub mod structured;
pub mod summary;
pub mod word;

pub use coordinator::ExportCoordinator;
pub use dispatcher::{export, ExportArtifact, ExportOutcome};
pub use encoder::{encoder_for, SubmissionEncoder, REPORT_TITLE};
pub use format::ExportFormat;
pub use schema::{Column, FULL_COLUMNS, PAGE_COLUMNS};
pub use staging::{stage_artifact, StagedExport};
pub use structured::{decode_structured, StructuredRecord};
pub use summary::ExportSummary;
