//! Export format keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Office Open XML spreadsheet
    Excel,
    /// Paginated PDF table
    Pdf,
    /// Office Open XML word-processing document
    Word,
}

impl ExportFormat {
    /// Every format, in menu order
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Csv,
        ExportFormat::Json,
        ExportFormat::Excel,
        ExportFormat::Pdf,
        ExportFormat::Word,
    ];

    /// Canonical names accepted on the command line
    pub const NAMES: [&'static str; 5] = ["csv", "json", "excel", "pdf", "word"];

    /// Canonical key of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "word",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    /// Parses a format name
    ///
    /// Names are trimmed and matched case-insensitively. File extensions
    /// such as `xlsx` or `docx` are not format names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "excel" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            "word" => Ok(ExportFormat::Word),
            _ => Err(format!(
                "Unsupported export format '{}'. Must be one of: {}",
                s.trim(),
                Self::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_normalised() {
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("Excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("WORD".parse::<ExportFormat>().unwrap(), ExportFormat::Word);
    }

    #[test]
    fn test_file_extensions_are_not_names() {
        for name in ["xlsx", "docx", "DOCX", "xls"] {
            assert!(name.parse::<ExportFormat>().is_err(), "{name} parsed");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(err.contains("'xml'"));
        assert!("".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_names_match_keys() {
        for (format, name) in ExportFormat::ALL.iter().zip(ExportFormat::NAMES) {
            assert_eq!(format.as_str(), name);
        }
    }
}
