//! Update-status command implementation
//!
//! An unknown submission id is reported but is not a failure.

use super::{report_failure, CommandContext};
use crate::core::triage::TriageService;
use crate::domain::{SubmissionId, SubmissionStatus};
use clap::Args;

/// Arguments for the update-status command
#[derive(Args, Debug)]
pub struct UpdateStatusArgs {
    /// Submission id
    pub id: i64,

    /// New status (pending, contacted, converted)
    pub status: String,
}

impl UpdateStatusArgs {
    /// Execute the update-status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let id = match SubmissionId::new(self.id) {
            Ok(id) => id,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        if !SubmissionStatus::is_valid(self.status.trim()) {
            println!(
                "❌ Invalid status '{}'. Must be one of: pending, contacted, converted",
                self.status
            );
            return Ok(2);
        }

        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        match TriageService::new(ctx.store).update_status(id, &self.status).await {
            Ok(notice) if notice.is_success() => {
                println!("✅ {notice}");
                Ok(0)
            }
            Ok(notice) => {
                println!("⚠️  {notice}");
                Ok(0)
            }
            Err(e) => Ok(report_failure("Status update", &e)),
        }
    }
}
