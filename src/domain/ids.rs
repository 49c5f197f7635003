//! Domain identifier types with validation
//!
//! Newtype wrappers keep submission and plan identifiers from being mixed up.
//! Both are positive integers assigned by the record store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Submission identifier newtype wrapper
///
/// Identifiers are assigned monotonically by the store and never reused.
///
/// # Examples
///
/// ```
/// use whatsflow::domain::ids::SubmissionId;
/// use std::str::FromStr;
///
/// let id = SubmissionId::from_str("17").unwrap();
/// assert_eq!(id.value(), 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(i64);

impl SubmissionId {
    /// Creates a new SubmissionId
    ///
    /// # Returns
    ///
    /// Returns `Err` if the value is not strictly positive
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("Submission ID must be positive, got {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid submission ID '{s}'"))?;
        Self::new(raw)
    }
}

/// Pricing plan identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanId(i64);

impl PlanId {
    /// Creates a new PlanId
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("Plan ID must be positive, got {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid plan ID '{s}'"))?;
        Self::new(raw)
    }
}
