//! Submission triage status
//!
//! The status lifecycle is a closed set. Any status may move to any other
//! status directly; the only rule is membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triage state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Not yet handled by staff
    #[default]
    Pending,
    /// Staff reached out to the prospect
    Contacted,
    /// Prospect became a client
    Converted,
}

impl SubmissionStatus {
    /// Every status, in lifecycle order
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::Pending,
        SubmissionStatus::Contacted,
        SubmissionStatus::Converted,
    ];

    /// Stored/exported representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Converted => "converted",
        }
    }

    /// Returns true when `value` names a member of the lifecycle
    ///
    /// Accepts exactly what [`FromStr`] accepts: surrounding whitespace is
    /// ignored, case is not.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<SubmissionStatus>().is_ok()
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(SubmissionStatus::Pending),
            "contacted" => Ok(SubmissionStatus::Contacted),
            "converted" => Ok(SubmissionStatus::Converted),
            other => Err(format!(
                "Invalid status '{other}'. Must be one of: pending, contacted, converted"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Pending);
    }

    #[test]
    fn test_is_valid() {
        assert!(SubmissionStatus::is_valid("pending"));
        assert!(SubmissionStatus::is_valid("contacted"));
        assert!(SubmissionStatus::is_valid("converted"));
        assert!(!SubmissionStatus::is_valid("archived"));
        assert!(!SubmissionStatus::is_valid("Pending"));
        assert!(!SubmissionStatus::is_valid(""));
    }

    #[test]
    fn test_is_valid_agrees_with_parse() {
        for value in [" contacted ", "converted\n", "\tpending", "Pending", " ", "lost"] {
            assert_eq!(
                SubmissionStatus::is_valid(value),
                value.parse::<SubmissionStatus>().is_ok(),
                "disagreement on {value:?}"
            );
        }
        assert!(SubmissionStatus::is_valid(" contacted "));
    }

    #[test]
    fn test_parse_round_trip() {
        for status in SubmissionStatus::ALL {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "lost".parse::<SubmissionStatus>().unwrap_err();
        assert!(err.contains("lost"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Contacted).unwrap();
        assert_eq!(json, "\"contacted\"");
    }
}
