//! PostgreSQL row models
//!
//! Row structs mirror the `submissions` and `pricing_plans` tables and convert
//! into domain types. Conversion re-checks what the database cannot express
//! (positive identifiers, feature list shape) and never panics on a bad row.

use crate::domain::{
    PlanDefinition, PlanId, PricingPlan, Result, Submission, SubmissionId, SubmissionStatus,
    WhatsFlowError,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio_postgres::Row;

/// Column list shared by every submission query
pub const SUBMISSION_COLUMNS: &str = "id, full_name, business_name, email, whatsapp_number, \
     country, message, plan_selected, status, created_at";

/// Column list shared by every plan query
pub const PLAN_COLUMNS: &str = "id, plan_name, base_price, current_price, discount_percent, \
     features, is_featured, checkout_url, updated_at";

/// One row of the `submissions` table
#[derive(Debug, Clone)]
pub struct PostgreSQLSubmission {
    pub id: i64,
    pub full_name: String,
    pub business_name: String,
    pub email: String,
    pub whatsapp_number: String,
    pub country: String,
    pub message: Option<String>,
    pub plan_selected: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl PostgreSQLSubmission {
    /// Reads a row selected with [`SUBMISSION_COLUMNS`]
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: column(row, "id")?,
            full_name: column(row, "full_name")?,
            business_name: column(row, "business_name")?,
            email: column(row, "email")?,
            whatsapp_number: column(row, "whatsapp_number")?,
            country: column(row, "country")?,
            message: column(row, "message")?,
            plan_selected: column(row, "plan_selected")?,
            status: column(row, "status")?,
            created_at: column(row, "created_at")?,
        })
    }

    /// Converts into the domain submission
    pub fn into_domain(self) -> Result<Submission> {
        let id = SubmissionId::new(self.id).map_err(WhatsFlowError::Database)?;
        let status: SubmissionStatus = self
            .status
            .parse()
            .map_err(|e| WhatsFlowError::Database(format!("submission {id}: {e}")))?;

        Ok(Submission {
            id,
            full_name: self.full_name,
            business_name: self.business_name,
            email: self.email,
            whatsapp_number: self.whatsapp_number,
            country: self.country,
            message: self.message,
            plan_selected: self.plan_selected,
            status,
            created_at: self.created_at,
        })
    }
}

/// One row of the `pricing_plans` table
///
/// `current_price` is read for completeness but the domain value is always
/// recomputed from base price and discount.
#[derive(Debug, Clone)]
pub struct PostgreSQLPlan {
    pub id: i64,
    pub plan_name: String,
    pub base_price: f64,
    pub current_price: f64,
    pub discount_percent: i32,
    pub features: Value,
    pub is_featured: bool,
    pub checkout_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PostgreSQLPlan {
    /// Reads a row selected with [`PLAN_COLUMNS`]
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: column(row, "id")?,
            plan_name: column(row, "plan_name")?,
            base_price: column(row, "base_price")?,
            current_price: column(row, "current_price")?,
            discount_percent: column(row, "discount_percent")?,
            features: column(row, "features")?,
            is_featured: column(row, "is_featured")?,
            checkout_url: column(row, "checkout_url")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    /// Converts into the domain plan
    pub fn into_domain(self) -> Result<PricingPlan> {
        let id = PlanId::new(self.id).map_err(WhatsFlowError::Database)?;
        let features: Vec<String> = serde_json::from_value(self.features).map_err(|e| {
            WhatsFlowError::Database(format!("plan {id} has malformed features: {e}"))
        })?;

        let plan = PricingPlan::new(
            id,
            PlanDefinition {
                plan_name: self.plan_name,
                base_price: self.base_price,
                discount_percent: i64::from(self.discount_percent),
                features,
                is_featured: self.is_featured,
                checkout_url: self.checkout_url,
            },
            self.updated_at,
        );

        if (plan.current_price() - self.current_price).abs() > 1e-6 {
            tracing::warn!(
                plan_id = %id,
                stored = self.current_price,
                derived = plan.current_price(),
                "Stored current_price disagrees with base price and discount; using derived value"
            );
        }

        Ok(plan)
    }
}

/// Serializes a feature list for the JSONB column
pub fn features_to_json(features: &[String]) -> Value {
    Value::from(features.to_vec())
}

fn column<'a, T>(row: &'a Row, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name)
        .map_err(|e| WhatsFlowError::Database(format!("Failed to read column '{name}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission_row(status: &str) -> PostgreSQLSubmission {
        PostgreSQLSubmission {
            id: 4,
            full_name: "Kwame Asante".to_string(),
            business_name: "Asante Motors".to_string(),
            email: "kwame@asantemotors.com".to_string(),
            whatsapp_number: "+233241112222".to_string(),
            country: "Ghana".to_string(),
            message: None,
            plan_selected: "Business".to_string(),
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 8, 15, 0).unwrap(),
        }
    }

    #[test]
    fn test_submission_into_domain() {
        let submission = submission_row("contacted").into_domain().unwrap();
        assert_eq!(submission.id.value(), 4);
        assert_eq!(submission.status, SubmissionStatus::Contacted);
    }

    #[test]
    fn test_submission_with_unknown_status_is_rejected() {
        let err = submission_row("archived").into_domain().unwrap_err();
        assert!(matches!(err, WhatsFlowError::Database(_)));
    }

    #[test]
    fn test_plan_into_domain_recomputes_price() {
        let row = PostgreSQLPlan {
            id: 2,
            plan_name: "Pro".to_string(),
            base_price: 125.0,
            current_price: 999.0,
            discount_percent: 20,
            features: features_to_json(&["Lead qualification".to_string()]),
            is_featured: true,
            checkout_url: None,
            updated_at: Utc::now(),
        };
        let plan = row.into_domain().unwrap();
        assert_eq!(plan.current_price(), 100.0);
        assert_eq!(plan.features(), ["Lead qualification".to_string()]);
    }

    #[test]
    fn test_plan_with_malformed_features() {
        let row = PostgreSQLPlan {
            id: 2,
            plan_name: "Pro".to_string(),
            base_price: 125.0,
            current_price: 125.0,
            discount_percent: 0,
            features: serde_json::json!({"not": "a list"}),
            is_featured: false,
            checkout_url: None,
            updated_at: Utc::now(),
        };
        assert!(row.into_domain().is_err());
    }
}
