use crate::adapters::database::traits::{RecordStore, StatusUpdate};
use crate::domain::{
    NewSubmission, PlanDefinition, PlanId, PricingPlan, Result, Submission, SubmissionId,
    SubmissionStatus, WhatsFlowError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    submissions: BTreeMap<SubmissionId, Submission>,
    plans: BTreeMap<PlanId, PricingPlan>,
    last_submission_id: i64,
    last_plan_id: i64,
}

/// In-memory implementation of [`RecordStore`] using ordered maps
///
/// A single lock guards both tables, so every operation is serialized.
/// Identifiers are never reused.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a submission with an explicit creation time
    ///
    /// Used to load historical data and to build deterministic fixtures.
    pub async fn insert_submission_at(
        &self,
        new: NewSubmission,
        created_at: DateTime<Utc>,
    ) -> Result<Submission> {
        let mut state = self.state.write().await;
        state.last_submission_id += 1;
        let id = SubmissionId::new(state.last_submission_id).map_err(WhatsFlowError::Other)?;
        let submission = Submission::from_new(id, new, created_at);
        state.submissions.insert(id, submission.clone());
        Ok(submission)
    }

    async fn sorted_submissions(&self, limit: Option<usize>) -> Vec<Submission> {
        let state = self.state.read().await;
        let mut all: Vec<Submission> = state.submissions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            all.truncate(limit);
        }
        all
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn create_submission(&self, new: NewSubmission) -> Result<Submission> {
        self.insert_submission_at(new, Utc::now()).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        Ok(self.sorted_submissions(None).await)
    }

    async fn recent_submissions(&self, limit: usize) -> Result<Vec<Submission>> {
        Ok(self.sorted_submissions(Some(limit)).await)
    }

    async fn count_submissions(&self, status: Option<SubmissionStatus>) -> Result<u64> {
        let state = self.state.read().await;
        let count = match status {
            Some(status) => state
                .submissions
                .values()
                .filter(|s| s.status == status)
                .count(),
            None => state.submissions.len(),
        };
        Ok(count as u64)
    }

    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<StatusUpdate> {
        let mut state = self.state.write().await;
        match state.submissions.get_mut(&id) {
            Some(submission) => {
                submission.status = status;
                Ok(StatusUpdate::Updated(submission.clone()))
            }
            None => Ok(StatusUpdate::NotFound),
        }
    }

    async fn list_plans(&self) -> Result<Vec<PricingPlan>> {
        let state = self.state.read().await;
        Ok(state.plans.values().cloned().collect())
    }

    async fn get_plan(&self, id: PlanId) -> Result<PricingPlan> {
        let state = self.state.read().await;
        state
            .plans
            .get(&id)
            .cloned()
            .ok_or_else(|| WhatsFlowError::NotFound(format!("Pricing plan {id} not found")))
    }

    async fn insert_plan(&self, definition: PlanDefinition) -> Result<PricingPlan> {
        let definition = definition.normalized();
        definition.validate()?;

        let mut state = self.state.write().await;
        if state
            .plans
            .values()
            .any(|p| p.plan_name() == definition.plan_name)
        {
            return Err(WhatsFlowError::Validation(format!(
                "A plan named '{}' already exists",
                definition.plan_name
            )));
        }

        state.last_plan_id += 1;
        let id = PlanId::new(state.last_plan_id).map_err(WhatsFlowError::Other)?;
        let plan = PricingPlan::new(id, definition, Utc::now());
        state.plans.insert(id, plan.clone());
        Ok(plan)
    }

    async fn save_plan(&self, plan: &PricingPlan) -> Result<()> {
        let mut state = self.state.write().await;
        match state.plans.get_mut(&plan.id()) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(())
            }
            None => Err(WhatsFlowError::NotFound(format!(
                "Pricing plan {} not found",
                plan.id()
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
