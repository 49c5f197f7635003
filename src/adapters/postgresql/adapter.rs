//! PostgreSQL adapter implementing the record store trait

use crate::adapters::database::traits::{RecordStore, StatusUpdate};
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{
    features_to_json, PostgreSQLPlan, PostgreSQLSubmission, PLAN_COLUMNS, SUBMISSION_COLUMNS,
};
use crate::domain::plan::{clamp_discount, discounted_price};
use crate::domain::{
    NewSubmission, PlanDefinition, PlanId, PricingPlan, Result, Submission, SubmissionId,
    SubmissionStatus, WhatsFlowError,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio_postgres::error::SqlState;

/// PostgreSQL implementation of [`RecordStore`]
///
/// Single-row updates rely on PostgreSQL's row locking; no application-level
/// locking is added.
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }

    fn submissions_from_rows(rows: &[tokio_postgres::Row]) -> Result<Vec<Submission>> {
        rows.iter()
            .map(|row| PostgreSQLSubmission::from_row(row)?.into_domain())
            .collect()
    }
}

#[async_trait]
impl RecordStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn create_submission(&self, new: NewSubmission) -> Result<Submission> {
        let query = format!(
            "INSERT INTO submissions (
                full_name, business_name, email, whatsapp_number,
                country, message, plan_selected, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SUBMISSION_COLUMNS}"
        );
        let status = SubmissionStatus::default().as_str();
        let created_at = Utc::now();

        let row = self
            .client
            .query_opt(
                &query,
                &[
                    &new.full_name,
                    &new.business_name,
                    &new.email,
                    &new.whatsapp_number,
                    &new.country,
                    &new.message,
                    &new.plan_selected,
                    &status,
                    &created_at,
                ],
            )
            .await?
            .ok_or_else(|| WhatsFlowError::Database("INSERT returned no row".to_string()))?;

        let submission = PostgreSQLSubmission::from_row(&row)?.into_domain()?;
        tracing::debug!(submission_id = %submission.id, "Submission stored in PostgreSQL");
        Ok(submission)
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        let query = format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions ORDER BY created_at DESC, id DESC"
        );
        let rows = self.client.query(&query, &[]).await?;
        Self::submissions_from_rows(&rows)
    }

    async fn recent_submissions(&self, limit: usize) -> Result<Vec<Submission>> {
        let query = format!(
            "SELECT {SUBMISSION_COLUMNS} FROM submissions
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self.client.query(&query, &[&limit]).await?;
        Self::submissions_from_rows(&rows)
    }

    async fn count_submissions(&self, status: Option<SubmissionStatus>) -> Result<u64> {
        let row = match status {
            Some(status) => {
                self.client
                    .query_opt(
                        "SELECT COUNT(*) FROM submissions WHERE status = $1",
                        &[&status.as_str()],
                    )
                    .await?
            }
            None => {
                self.client
                    .query_opt("SELECT COUNT(*) FROM submissions", &[])
                    .await?
            }
        };

        let count: i64 = row
            .map(|r| r.try_get(0))
            .transpose()
            .map_err(|e| WhatsFlowError::Database(format!("Failed to read count: {e}")))?
            .unwrap_or(0);

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<StatusUpdate> {
        let query = format!(
            "UPDATE submissions SET status = $1 WHERE id = $2 RETURNING {SUBMISSION_COLUMNS}"
        );

        match self
            .client
            .query_opt(&query, &[&status.as_str(), &id.value()])
            .await?
        {
            Some(row) => Ok(StatusUpdate::Updated(
                PostgreSQLSubmission::from_row(&row)?.into_domain()?,
            )),
            None => Ok(StatusUpdate::NotFound),
        }
    }

    async fn list_plans(&self) -> Result<Vec<PricingPlan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM pricing_plans ORDER BY id ASC");
        let rows = self.client.query(&query, &[]).await?;
        rows.iter()
            .map(|row| PostgreSQLPlan::from_row(row)?.into_domain())
            .collect()
    }

    async fn get_plan(&self, id: PlanId) -> Result<PricingPlan> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM pricing_plans WHERE id = $1");
        let row = self
            .client
            .query_opt(&query, &[&id.value()])
            .await?
            .ok_or_else(|| WhatsFlowError::NotFound(format!("Pricing plan {id} not found")))?;

        PostgreSQLPlan::from_row(&row)?.into_domain()
    }

    async fn insert_plan(&self, definition: PlanDefinition) -> Result<PricingPlan> {
        let definition = definition.normalized();
        definition.validate()?;

        let discount = clamp_discount(definition.discount_percent);
        let current_price = discounted_price(definition.base_price, discount);
        let discount = i32::from(discount);
        let features = features_to_json(&definition.features);
        let updated_at = Utc::now();

        let query = format!(
            "INSERT INTO pricing_plans (
                plan_name, base_price, current_price, discount_percent,
                features, is_featured, checkout_url, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PLAN_COLUMNS}"
        );

        let conn = self.client.get_connection().await?;
        let row = conn
            .query_one(
                &query,
                &[
                    &definition.plan_name,
                    &definition.base_price,
                    &current_price,
                    &discount,
                    &features,
                    &definition.is_featured,
                    &definition.checkout_url,
                    &updated_at,
                ],
            )
            .await
            .map_err(|e| {
                if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                    WhatsFlowError::Validation(format!(
                        "A plan named '{}' already exists",
                        definition.plan_name
                    ))
                } else {
                    WhatsFlowError::Database(format!("Failed to insert plan: {e}"))
                }
            })?;

        PostgreSQLPlan::from_row(&row)?.into_domain()
    }

    async fn save_plan(&self, plan: &PricingPlan) -> Result<()> {
        let discount = i32::from(plan.discount_percent());
        let updated_at = plan.updated_at();

        let affected = self
            .client
            .execute(
                "UPDATE pricing_plans
                 SET base_price = $1, current_price = $2, discount_percent = $3, updated_at = $4
                 WHERE id = $5",
                &[
                    &plan.base_price(),
                    &plan.current_price(),
                    &discount,
                    &updated_at,
                    &plan.id().value(),
                ],
            )
            .await?;

        if affected == 0 {
            return Err(WhatsFlowError::NotFound(format!(
                "Pricing plan {} not found",
                plan.id()
            )));
        }

        tracing::debug!(plan_id = %plan.id(), "Pricing plan saved to PostgreSQL");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
