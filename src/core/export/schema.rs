//! Shared column schema and record projection
//!
//! Every encoder works from the same logical columns. Text and spreadsheet
//! formats use [`FULL_COLUMNS`]; page-bound formats use the narrower
//! [`PAGE_COLUMNS`] because nine columns do not fit across a page.

use crate::domain::{EncodingError, Submission};
use chrono::Datelike;
use std::borrow::Cow;

/// One logical export column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Name,
    Business,
    Email,
    WhatsApp,
    Country,
    Plan,
    Message,
    Status,
}

impl Column {
    /// Header text shown in tabular formats
    pub fn header(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Name => "Name",
            Column::Business => "Business",
            Column::Email => "Email",
            Column::WhatsApp => "WhatsApp",
            Column::Country => "Country",
            Column::Plan => "Plan",
            Column::Message => "Message",
            Column::Status => "Status",
        }
    }

    /// Field name used by the structured-text format
    pub fn key(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Name => "name",
            Column::Business => "business",
            Column::Email => "email",
            Column::WhatsApp => "whatsapp",
            Column::Country => "country",
            Column::Plan => "plan",
            Column::Message => "message",
            Column::Status => "status",
        }
    }
}

/// Nine-column projection: delimited text, structured text, spreadsheet
pub const FULL_COLUMNS: [Column; 9] = [
    Column::Date,
    Column::Name,
    Column::Business,
    Column::Email,
    Column::WhatsApp,
    Column::Country,
    Column::Plan,
    Column::Message,
    Column::Status,
];

/// Six-column projection: paginated and word-processing documents
pub const PAGE_COLUMNS: [Column; 6] = [
    Column::Date,
    Column::Name,
    Column::Business,
    Column::Email,
    Column::Plan,
    Column::Status,
];

/// How the creation timestamp is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD HH:MM`
    Minute,
    /// `YYYY-MM-DD`
    Day,
}

impl DateStyle {
    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Minute => "%Y-%m-%d %H:%M",
            DateStyle::Day => "%Y-%m-%d",
        }
    }
}

/// Header texts for a column set
pub fn headers(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(Column::header).collect()
}

/// A submission that has passed export validation
///
/// Only obtainable through [`prepare_rows`], so an encoder holding rows knows
/// every one of them can be rendered.
#[derive(Debug, Clone, Copy)]
pub struct ExportRow<'a> {
    submission: &'a Submission,
}

impl<'a> ExportRow<'a> {
    fn new(submission: &'a Submission) -> Result<Self, EncodingError> {
        let year = submission.created_at.year();
        if !(1..=9999).contains(&year) {
            return Err(EncodingError::invalid_record(
                submission.id.value(),
                format!("creation year {year} is outside 1..=9999"),
            ));
        }

        let fields = [
            ("full_name", submission.full_name.as_str()),
            ("business_name", submission.business_name.as_str()),
            ("email", submission.email.as_str()),
            ("whatsapp_number", submission.whatsapp_number.as_str()),
            ("country", submission.country.as_str()),
            ("message", submission.message.as_deref().unwrap_or_default()),
            ("plan_selected", submission.plan_selected.as_str()),
        ];
        for (field, value) in fields {
            if let Some(c) = value
                .chars()
                .find(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
            {
                return Err(EncodingError::invalid_record(
                    submission.id.value(),
                    format!("{field} contains control character U+{:04X}", c as u32),
                ));
            }
        }

        Ok(Self { submission })
    }

    /// The underlying record
    pub fn submission(&self) -> &'a Submission {
        self.submission
    }

    /// Renders one cell as text
    ///
    /// An absent message renders as the empty string.
    pub fn cell(&self, column: Column, dates: DateStyle) -> Cow<'a, str> {
        let s = self.submission;
        match column {
            Column::Date => Cow::Owned(s.created_at.format(dates.pattern()).to_string()),
            Column::Name => Cow::Borrowed(&s.full_name),
            Column::Business => Cow::Borrowed(&s.business_name),
            Column::Email => Cow::Borrowed(&s.email),
            Column::WhatsApp => Cow::Borrowed(&s.whatsapp_number),
            Column::Country => Cow::Borrowed(&s.country),
            Column::Plan => Cow::Borrowed(&s.plan_selected),
            Column::Message => Cow::Borrowed(s.message.as_deref().unwrap_or_default()),
            Column::Status => Cow::Borrowed(s.status.as_str()),
        }
    }

    /// Renders a full row for a column set
    pub fn cells(&self, columns: &[Column], dates: DateStyle) -> Vec<Cow<'a, str>> {
        columns.iter().map(|c| self.cell(*c, dates)).collect()
    }
}

/// Validates every record before any output is produced
///
/// # Errors
///
/// Returns the first record that cannot be rendered; input order is kept.
pub fn prepare_rows(records: &[Submission]) -> Result<Vec<ExportRow<'_>>, EncodingError> {
    records.iter().map(ExportRow::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubmissionId, SubmissionStatus};
    use chrono::{TimeZone, Utc};

    fn submission(id: i64) -> Submission {
        Submission {
            id: SubmissionId::new(id).unwrap(),
            full_name: "Amara Nwosu".to_string(),
            business_name: "Nwosu Foods".to_string(),
            email: "amara@nwosufoods.ng".to_string(),
            whatsapp_number: "+2348031234567".to_string(),
            country: "Nigeria".to_string(),
            message: None,
            plan_selected: "Pro".to_string(),
            status: SubmissionStatus::Converted,
            created_at: Utc.with_ymd_and_hms(2024, 2, 29, 17, 5, 59).unwrap(),
        }
    }

    #[test]
    fn test_date_styles() {
        let s = submission(1);
        let rows = prepare_rows(std::slice::from_ref(&s)).unwrap();
        assert_eq!(rows[0].cell(Column::Date, DateStyle::Minute), "2024-02-29 17:05");
        assert_eq!(rows[0].cell(Column::Date, DateStyle::Day), "2024-02-29");
    }

    #[test]
    fn test_absent_message_is_empty_cell() {
        let s = submission(1);
        let rows = prepare_rows(std::slice::from_ref(&s)).unwrap();
        assert_eq!(rows[0].cell(Column::Message, DateStyle::Minute), "");
        assert_eq!(rows[0].cell(Column::Status, DateStyle::Minute), "converted");
    }

    #[test]
    fn test_page_columns_are_a_subset() {
        assert_eq!(headers(&PAGE_COLUMNS), ["Date", "Name", "Business", "Email", "Plan", "Status"]);
        assert!(PAGE_COLUMNS.iter().all(|c| FULL_COLUMNS.contains(c)));
    }

    #[test]
    fn test_control_character_rejected() {
        let mut bad = submission(7);
        bad.business_name = "Nwosu\u{0007}Foods".to_string();
        let records = vec![submission(1), bad];

        let err = prepare_rows(&records).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::InvalidRecord { submission_id: 7, .. }
        ));
        assert!(err.to_string().contains("U+0007"));
    }

    #[test]
    fn test_line_breaks_allowed() {
        let mut s = submission(1);
        s.message = Some("Line one\r\nLine two\tend".to_string());
        assert!(prepare_rows(std::slice::from_ref(&s)).is_ok());
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        let mut s = submission(3);
        s.created_at = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let err = prepare_rows(std::slice::from_ref(&s)).unwrap_err();
        assert!(err.to_string().contains("10000"));
    }
}
