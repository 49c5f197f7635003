//! Submission intake and staff triage
//!
//! Wraps the record store with the behaviour the contact form and the admin
//! dashboard rely on: validated intake with a best-effort notification, status
//! updates that never fail on unknown ids, and dashboard counters.

use crate::adapters::database::{RecordStore, StatusUpdate};
use crate::config::NotificationConfig;
use crate::core::notice::Notice;
use crate::domain::{
    NewSubmission, Result, Submission, SubmissionId, SubmissionStatus, WhatsFlowError,
};
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

/// Number of submissions shown in the dashboard's "recent" panel
pub const RECENT_LIMIT: usize = 5;

/// Receives every newly stored submission
#[async_trait]
pub trait SubmissionNotifier: Send + Sync {
    /// Announce a new submission to staff
    ///
    /// # Errors
    ///
    /// Implementations may fail; the caller logs the failure and carries on.
    async fn notify(&self, submission: &Submission) -> Result<()>;
}

/// Notifier that writes the announcement to the log
#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier {
    admin_email: Option<String>,
}

impl LoggingNotifier {
    pub fn new(admin_email: Option<String>) -> Self {
        Self { admin_email }
    }
}

#[async_trait]
impl SubmissionNotifier for LoggingNotifier {
    async fn notify(&self, submission: &Submission) -> Result<()> {
        tracing::info!(
            submission_id = %submission.id,
            business = %submission.business_name,
            plan = %submission.plan_selected,
            recipient = self.admin_email.as_deref().unwrap_or("(not configured)"),
            "New submission received"
        );
        Ok(())
    }
}

/// Counters and recent activity for the admin dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: u64,
    pub pending: u64,
    pub contacted: u64,
    pub converted: u64,
    /// Newest first, at most [`RECENT_LIMIT`] entries
    pub recent: Vec<Submission>,
}

/// Triage service over a record store
pub struct TriageService {
    store: Arc<dyn RecordStore + Send + Sync>,
    notifier: Option<Arc<dyn SubmissionNotifier>>,
}

impl TriageService {
    /// Service without notifications
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self {
            store,
            notifier: None,
        }
    }

    /// Service wired according to `[notifications]`
    pub fn from_config(
        store: Arc<dyn RecordStore + Send + Sync>,
        config: &NotificationConfig,
    ) -> Self {
        let service = Self::new(store);
        if config.enabled {
            service.with_notifier(Arc::new(LoggingNotifier::new(config.admin_email.clone())))
        } else {
            service
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn SubmissionNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Store a contact-form submission
    ///
    /// The submission is kept even if the notifier fails.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store rejects the insert.
    pub async fn create_submission(&self, new: NewSubmission) -> Result<Submission> {
        let submission = self.store.create_submission(new).await?;
        tracing::info!(submission_id = %submission.id, "Submission stored");

        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(&submission).await {
                tracing::warn!(
                    submission_id = %submission.id,
                    error = %e,
                    "Submission notification failed"
                );
            }
        }

        Ok(submission)
    }

    /// All submissions newest first, optionally narrowed to one status
    pub async fn list_submissions(
        &self,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<Submission>> {
        let mut submissions = self.store.list_submissions().await?;
        if let Some(status) = status {
            submissions.retain(|s| s.status == status);
        }
        Ok(submissions)
    }

    /// Move a submission to a new status
    ///
    /// An unknown id yields an error notice, never an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`WhatsFlowError::Validation`] if `status` is not a lifecycle
    /// member; nothing is stored in that case.
    pub async fn update_status(&self, id: SubmissionId, status: &str) -> Result<Notice> {
        let status = SubmissionStatus::from_str(status).map_err(WhatsFlowError::Validation)?;

        match self.store.update_status(id, status).await? {
            StatusUpdate::Updated(_) => {
                tracing::info!(submission_id = %id, %status, "Submission status updated");
                Ok(Notice::success(format!("Status updated to {status}")))
            }
            StatusUpdate::NotFound => {
                tracing::warn!(submission_id = %id, "Status update for unknown submission");
                Ok(Notice::error(format!("Submission {id} not found")))
            }
        }
    }

    /// Counters per status plus the five newest submissions
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(DashboardStats {
            total: self.store.count_submissions(None).await?,
            pending: self
                .store
                .count_submissions(Some(SubmissionStatus::Pending))
                .await?,
            contacted: self
                .store
                .count_submissions(Some(SubmissionStatus::Contacted))
                .await?,
            converted: self
                .store
                .count_submissions(Some(SubmissionStatus::Converted))
                .await?,
            recent: self.store.recent_submissions(RECENT_LIMIT).await?,
        })
    }
}
