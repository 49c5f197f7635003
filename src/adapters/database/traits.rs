//! Record store abstraction
//!
//! This module defines the trait that storage backends must implement to hold
//! WhatsFlow submissions and pricing plans.

use crate::domain::{
    NewSubmission, PlanDefinition, PlanId, PricingPlan, Result, Submission, SubmissionId,
    SubmissionStatus,
};
use async_trait::async_trait;

/// Outcome of a status update
///
/// An unknown identifier is a normal outcome, not an error: callers redirect
/// back to the listing either way.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusUpdate {
    /// The submission now carries the requested status
    Updated(Submission),

    /// No submission has the requested identifier; nothing changed
    NotFound,
}

/// Storage backend for submissions and the pricing catalog
///
/// Implementations own the entities exclusively. Reads return snapshots; the
/// only mutations are submission insert, status update, and plan save.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Test the backend connection
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable.
    async fn test_connection(&self) -> Result<()>;

    /// Create the tables the store needs, if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert a validated submission
    ///
    /// The store assigns the next identifier, sets status to `pending` and
    /// stamps the creation time.
    async fn create_submission(&self, new: NewSubmission) -> Result<Submission>;

    /// All submissions, newest first
    ///
    /// Ties on creation time are broken by identifier, descending.
    async fn list_submissions(&self) -> Result<Vec<Submission>>;

    /// The `limit` newest submissions, in the same order as [`Self::list_submissions`]
    async fn recent_submissions(&self, limit: usize) -> Result<Vec<Submission>>;

    /// Count submissions, optionally restricted to one status
    async fn count_submissions(&self, status: Option<SubmissionStatus>) -> Result<u64>;

    /// Set a submission's status
    ///
    /// Persists immediately; last write wins. The creation timestamp is never
    /// touched.
    async fn update_status(
        &self,
        id: SubmissionId,
        status: SubmissionStatus,
    ) -> Result<StatusUpdate>;

    /// All pricing plans ordered by identifier ascending
    async fn list_plans(&self) -> Result<Vec<PricingPlan>>;

    /// Fetch one plan
    ///
    /// # Errors
    ///
    /// Returns `WhatsFlowError::NotFound` for an unknown identifier.
    async fn get_plan(&self, id: PlanId) -> Result<PricingPlan>;

    /// Insert a plan
    ///
    /// # Errors
    ///
    /// Returns `WhatsFlowError::Validation` when the definition is invalid or
    /// the plan name is already taken.
    async fn insert_plan(&self, definition: PlanDefinition) -> Result<PricingPlan>;

    /// Persist a mutated plan
    ///
    /// # Errors
    ///
    /// Returns `WhatsFlowError::NotFound` if the plan no longer exists.
    async fn save_plan(&self, plan: &PricingPlan) -> Result<()>;

    /// Short name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}
