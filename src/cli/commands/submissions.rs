//! Submissions command implementation
//!
//! Lists submissions newest first, optionally narrowed to one status.

use super::{report_failure, CommandContext};
use crate::core::triage::TriageService;
use crate::domain::{Submission, SubmissionStatus};
use clap::Args;
use std::str::FromStr;

/// Arguments for the submissions command
#[derive(Args, Debug)]
pub struct SubmissionsArgs {
    /// Only show submissions with this status (pending, contacted, converted)
    #[arg(long)]
    pub status: Option<String>,
}

impl SubmissionsArgs {
    /// Execute the submissions command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let status = match self.status.as_deref().map(SubmissionStatus::from_str) {
            Some(Err(e)) => {
                println!("❌ {e}");
                return Ok(2);
            }
            Some(Ok(status)) => Some(status),
            None => None,
        };

        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };
        let service = TriageService::new(ctx.store);

        let submissions = match service.list_submissions(status).await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("Listing submissions", &e)),
        };

        if submissions.is_empty() {
            println!("No submissions found.");
            return Ok(0);
        }

        println!("📋 Submissions ({})", submissions.len());
        println!();
        for submission in &submissions {
            println!("{}", format_line(submission));
        }

        Ok(0)
    }
}

pub(crate) fn format_line(submission: &Submission) -> String {
    format!(
        "  #{:<5} {}  {:<10} {} ({}) <{}> plan={}",
        submission.id,
        submission.created_at.format("%Y-%m-%d %H:%M"),
        submission.status,
        submission.full_name,
        submission.business_name,
        submission.email,
        submission.plan_selected
    )
}
