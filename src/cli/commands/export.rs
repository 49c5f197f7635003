//! Export command implementation
//!
//! Writes every submission, newest first, to `<output_dir>/submissions.<ext>`.

use super::{report_failure, CommandContext};
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (csv, json, excel, pdf, word); defaults to export.default_format
    pub format: Option<String>,

    /// Override the output directory from the configuration
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        let format = self
            .format
            .clone()
            .unwrap_or_else(|| ctx.config.export.default_format.clone());
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| ctx.config.export.output_dir.clone());

        let coordinator = ExportCoordinator::new(ctx.store, output_dir);

        println!("🚀 Exporting submissions as {}...", format.trim());
        let summary = match coordinator.execute_export(&format).await {
            Ok(s) => s,
            Err(e) => return Ok(report_failure("Export", &e)),
        };
        summary.log_summary();

        match &summary.staged {
            Some(staged) => {
                println!();
                println!("📊 Export Summary:");
                println!("  Format: {}", staged.format);
                println!("  Records: {}", summary.record_count);
                println!("  File: {}", staged.path.display());
                println!("  Size: {} bytes", staged.size);
                println!("  SHA-256: {}", staged.checksum);
                println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
                println!();
                println!("✅ Export completed successfully!");
            }
            None => {
                println!("⚠️  Unknown export format '{}', nothing exported", summary.requested_format);
            }
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            format: None,
            output_dir: None,
        };
        assert!(args.format.is_none());
        assert!(args.output_dir.is_none());
    }
}
