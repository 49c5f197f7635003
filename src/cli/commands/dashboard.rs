//! Dashboard command implementation

use super::submissions::format_line;
use super::{report_failure, CommandContext};
use crate::core::triage::TriageService;
use clap::Args;

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {}

impl DashboardArgs {
    /// Execute the dashboard command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let stats = match TriageService::new(ctx.store).dashboard_stats().await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("Loading dashboard", &e)),
        };

        println!("📊 Dashboard");
        println!("  Total: {}", stats.total);
        println!("  Pending: {}", stats.pending);
        println!("  Contacted: {}", stats.contacted);
        println!("  Converted: {}", stats.converted);
        println!();
        println!("Recent submissions:");
        if stats.recent.is_empty() {
            println!("  (none)");
        }
        for submission in &stats.recent {
            println!("{}", format_line(submission));
        }

        Ok(0)
    }
}
