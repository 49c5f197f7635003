//! Submission domain model
//!
//! A submission is one contact-form inquiry from a prospective client.

use super::errors::WhatsFlowError;
use super::ids::SubmissionId;
use super::status::SubmissionStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of the full name column
pub const MAX_FULL_NAME_LEN: usize = 100;
/// Maximum length of the business name column
pub const MAX_BUSINESS_NAME_LEN: usize = 100;
/// Maximum length of the email column
pub const MAX_EMAIL_LEN: usize = 120;
/// Maximum length of the WhatsApp number column
pub const MAX_WHATSAPP_LEN: usize = 20;
/// Maximum length of the country column
pub const MAX_COUNTRY_LEN: usize = 50;
/// Maximum length of the selected plan column
pub const MAX_PLAN_LEN: usize = 20;
/// Maximum length of the optional message
pub const MAX_MESSAGE_LEN: usize = 5000;

/// A persisted contact-form inquiry
///
/// Instances are produced by the record store. `id` and `created_at` are set
/// once on insert; only `status` changes afterwards, through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Store-assigned identifier
    pub id: SubmissionId,

    /// Contact's full name
    pub full_name: String,

    /// Contact's business name
    pub business_name: String,

    /// Contact email address
    pub email: String,

    /// WhatsApp phone number
    pub whatsapp_number: String,

    /// Country of the business
    pub country: String,

    /// Optional free-text message
    pub message: Option<String>,

    /// Name of the pricing plan the prospect picked
    pub plan_selected: String,

    /// Triage status
    pub status: SubmissionStatus,

    /// Insert timestamp
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Materializes a stored submission from a validated inbound form
    pub fn from_new(id: SubmissionId, new: NewSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: new.full_name,
            business_name: new.business_name,
            email: new.email,
            whatsapp_number: new.whatsapp_number,
            country: new.country,
            message: new.message,
            plan_selected: new.plan_selected,
            status: SubmissionStatus::default(),
            created_at,
        }
    }
}

/// Validated inbound form fields
///
/// Build one with [`NewSubmission::builder`]. Status and creation time are not
/// part of the form; the store assigns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    /// Contact's full name
    pub full_name: String,
    /// Contact's business name
    pub business_name: String,
    /// Contact email address
    pub email: String,
    /// WhatsApp phone number
    pub whatsapp_number: String,
    /// Country of the business
    pub country: String,
    /// Optional free-text message
    pub message: Option<String>,
    /// Name of the selected plan
    pub plan_selected: String,
}

impl NewSubmission {
    /// Creates a new builder
    pub fn builder() -> NewSubmissionBuilder {
        NewSubmissionBuilder::default()
    }
}

/// Builder for [`NewSubmission`]
///
/// # Examples
///
/// ```
/// use whatsflow::domain::NewSubmission;
///
/// let form = NewSubmission::builder()
///     .full_name("Ada Obi")
///     .business_name("Obi Textiles")
///     .email("ada@obitextiles.com")
///     .whatsapp_number("+2348012345678")
///     .country("Nigeria")
///     .plan_selected("Pro")
///     .build()
///     .unwrap();
/// assert!(form.message.is_none());
/// ```
#[derive(Debug, Default)]
pub struct NewSubmissionBuilder {
    full_name: Option<String>,
    business_name: Option<String>,
    email: Option<String>,
    whatsapp_number: Option<String>,
    country: Option<String>,
    message: Option<String>,
    plan_selected: Option<String>,
}

impl NewSubmissionBuilder {
    /// Sets the full name
    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    /// Sets the business name
    pub fn business_name(mut self, value: impl Into<String>) -> Self {
        self.business_name = Some(value.into());
        self
    }

    /// Sets the email address
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Sets the WhatsApp number
    pub fn whatsapp_number(mut self, value: impl Into<String>) -> Self {
        self.whatsapp_number = Some(value.into());
        self
    }

    /// Sets the country
    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    /// Sets the optional message
    pub fn message(mut self, value: Option<String>) -> Self {
        self.message = value;
        self
    }

    /// Sets the selected plan name
    pub fn plan_selected(mut self, value: impl Into<String>) -> Self {
        self.plan_selected = Some(value.into());
        self
    }

    /// Validates and builds the form
    ///
    /// # Errors
    ///
    /// Returns [`WhatsFlowError::Validation`] when a required field is missing
    /// or blank, a field exceeds its column limit, or the email has no `@`.
    pub fn build(self) -> Result<NewSubmission, WhatsFlowError> {
        let full_name = required("full_name", self.full_name, MAX_FULL_NAME_LEN)?;
        let business_name = required("business_name", self.business_name, MAX_BUSINESS_NAME_LEN)?;
        let email = required("email", self.email, MAX_EMAIL_LEN)?;
        let whatsapp_number = required("whatsapp_number", self.whatsapp_number, MAX_WHATSAPP_LEN)?;
        let country = required("country", self.country, MAX_COUNTRY_LEN)?;
        let plan_selected = required("plan_selected", self.plan_selected, MAX_PLAN_LEN)?;

        if !email.contains('@') {
            return Err(WhatsFlowError::Validation(format!(
                "email '{email}' is not a valid address"
            )));
        }

        let message = self
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if message
            .as_ref()
            .is_some_and(|m| m.chars().count() > MAX_MESSAGE_LEN)
        {
            return Err(WhatsFlowError::Validation(format!(
                "message must be at most {MAX_MESSAGE_LEN} characters"
            )));
        }

        Ok(NewSubmission {
            full_name,
            business_name,
            email,
            whatsapp_number,
            country,
            message,
            plan_selected,
        })
    }
}

fn required(field: &str, value: Option<String>, max_len: usize) -> Result<String, WhatsFlowError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(WhatsFlowError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(WhatsFlowError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(value)
}
