//! Delimited-text (CSV) encoder

use super::encoder::SubmissionEncoder;
use super::format::ExportFormat;
use super::schema::{headers, prepare_rows, DateStyle, FULL_COLUMNS};
use crate::domain::{EncodingError, Submission};

/// RFC 4180 CSV, UTF-8, header row first
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedEncoder;

impl SubmissionEncoder for DelimitedEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn file_name(&self) -> &'static str {
        "submissions.csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError> {
        let rows = prepare_rows(records)?;
        let fail = |e: csv::Error| EncodingError::writer("csv", e);

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer.write_record(headers(&FULL_COLUMNS)).map_err(fail)?;
        for row in &rows {
            writer
                .write_record(row.cells(&FULL_COLUMNS, DateStyle::Minute).iter().map(|c| c.as_ref()))
                .map_err(fail)?;
        }

        writer
            .into_inner()
            .map_err(|e| EncodingError::writer("csv", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubmissionId, SubmissionStatus};
    use chrono::{TimeZone, Utc};

    fn submission(id: i64, name: &str, message: Option<&str>) -> Submission {
        Submission {
            id: SubmissionId::new(id).unwrap(),
            full_name: name.to_string(),
            business_name: "Mwangi & Sons, Ltd".to_string(),
            email: "info@mwangi.co.ke".to_string(),
            whatsapp_number: "+254700000001".to_string(),
            country: "Kenya".to_string(),
            message: message.map(str::to_string),
            plan_selected: "Starter".to_string(),
            status: SubmissionStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let bytes = DelimitedEncoder.encode(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Date,Name,Business,Email,WhatsApp,Country,Plan,Message,Status\r\n"
        );
    }

    #[test]
    fn test_quoting_and_absent_message() {
        let records = vec![
            submission(1, "Wanjiru Mwangi", Some("Say \"hi\"\nplease")),
            submission(2, "Otieno", None),
        ];
        let text = String::from_utf8(DelimitedEncoder.encode(&records).unwrap()).unwrap();

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let parsed: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(&parsed[0][0], "2024-01-15 09:30");
        assert_eq!(&parsed[0][2], "Mwangi & Sons, Ltd");
        assert_eq!(&parsed[0][7], "Say \"hi\"\nplease");
        assert_eq!(&parsed[1][7], "");
        assert_eq!(&parsed[1][8], "pending");
    }
}
