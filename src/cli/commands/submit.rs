//! Submit command implementation
//!
//! Records a contact-form submission from the command line.

use super::{report_failure, CommandContext};
use crate::core::triage::TriageService;
use crate::domain::NewSubmission;
use clap::Args;

/// Arguments for the submit command
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Contact's full name
    #[arg(long)]
    pub full_name: String,

    /// Business name
    #[arg(long)]
    pub business_name: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// WhatsApp number
    #[arg(long)]
    pub whatsapp: String,

    /// Country
    #[arg(long)]
    pub country: String,

    /// Selected plan name
    #[arg(long)]
    pub plan: String,

    /// Optional free-form message
    #[arg(long)]
    pub message: Option<String>,
}

impl SubmitArgs {
    fn to_new_submission(&self) -> crate::domain::Result<NewSubmission> {
        NewSubmission::builder()
            .full_name(&self.full_name)
            .business_name(&self.business_name)
            .email(&self.email)
            .whatsapp_number(&self.whatsapp)
            .country(&self.country)
            .plan_selected(&self.plan)
            .message(self.message.clone())
            .build()
    }

    /// Execute the submit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let new = match self.to_new_submission() {
            Ok(new) => new,
            Err(e) => {
                println!("❌ {e}");
                return Ok(2);
            }
        };

        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };
        let service = TriageService::from_config(ctx.store, &ctx.config.notifications);

        match service.create_submission(new).await {
            Ok(submission) => {
                println!(
                    "✅ Thank you! Submission #{} from {} recorded.",
                    submission.id, submission.business_name
                );
                Ok(0)
            }
            Err(e) => Ok(report_failure("Submission", &e)),
        }
    }
}
