//! Spreadsheet (XLSX) encoder

use super::encoder::SubmissionEncoder;
use super::format::ExportFormat;
use super::schema::{headers, prepare_rows, DateStyle, FULL_COLUMNS};
use crate::domain::{EncodingError, Submission};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::borrow::Cow;

/// Worksheet holding the export
pub const SHEET_NAME: &str = "Submissions";

/// Longest text a worksheet cell accepts
pub const MAX_CELL_CHARS: usize = 32_767;

/// Single-sheet workbook; every cell is written as a string
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetEncoder;

impl SubmissionEncoder for SpreadsheetEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }

    fn file_name(&self) -> &'static str {
        "submissions.xlsx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError> {
        let rows = prepare_rows(records)?;
        let fail = |e: XlsxError| EncodingError::writer("excel", e);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(fail)?;

        let header_format = Format::new().set_bold();
        for (col, header) in headers(&FULL_COLUMNS).into_iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, header, &header_format)
                .map_err(fail)?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            for (col_idx, cell) in row.cells(&FULL_COLUMNS, DateStyle::Minute).iter().enumerate() {
                worksheet
                    .write_string(excel_row, col_idx as u16, fit_cell(cell).as_ref())
                    .map_err(fail)?;
            }
        }

        worksheet.autofit();

        workbook.save_to_buffer().map_err(fail)
    }
}

/// Cuts text stored before intake limits existed down to the cell limit
fn fit_cell(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => Cow::Owned(text[..cut].to_string()),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubmissionId, SubmissionStatus};
    use chrono::Utc;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_sheet_name_and_header() {
        let bytes = SpreadsheetEncoder.encode(&[]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains("name=\"Submissions\""));

        let strings = read_part(&bytes, "xl/sharedStrings.xml");
        for header in ["Date", "WhatsApp", "Message", "Status"] {
            assert!(strings.contains(&format!(">{header}<")), "missing {header}");
        }
    }

    #[test]
    fn test_oversized_message_is_cut_to_cell_limit() {
        let record = Submission {
            id: SubmissionId::new(3).unwrap(),
            full_name: "Sipho Ndlovu".to_string(),
            business_name: "Ndlovu Logistics".to_string(),
            email: "sipho@ndlovu.co.za".to_string(),
            whatsapp_number: "+27831234567".to_string(),
            country: "South Africa".to_string(),
            message: Some("é".repeat(40_000)),
            plan_selected: "Business".to_string(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        };
        let bytes = SpreadsheetEncoder.encode(&[record]).unwrap();

        let strings = read_part(&bytes, "xl/sharedStrings.xml");
        let longest = strings
            .split(|c| c == '<' || c == '>')
            .map(|s| s.chars().count())
            .max()
            .unwrap();
        assert_eq!(longest, MAX_CELL_CHARS);
    }

    #[test]
    fn test_fit_cell() {
        assert_eq!(fit_cell("short"), "short");
        assert!(matches!(fit_cell("short"), Cow::Borrowed(_)));
        let long = "ab".repeat(MAX_CELL_CHARS);
        assert_eq!(fit_cell(&long).chars().count(), MAX_CELL_CHARS);
    }

    #[test]
    fn test_numeric_looking_values_stay_strings() {
        let record = Submission {
            id: SubmissionId::new(1).unwrap(),
            full_name: "Zanele Dube".to_string(),
            business_name: "Dube Salon".to_string(),
            email: "zanele@dube.co.za".to_string(),
            whatsapp_number: "27821234567".to_string(),
            country: "South Africa".to_string(),
            message: None,
            plan_selected: "Pro".to_string(),
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        };
        let bytes = SpreadsheetEncoder.encode(&[record]).unwrap();
        let strings = read_part(&bytes, "xl/sharedStrings.xml");
        assert!(strings.contains(">27821234567<"));
    }
}
