//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for WhatsFlow using clap.
//! It stands in for the admin surface: every admin action has a command.

pub mod commands;

use clap::{Parser, Subcommand};

/// WhatsFlow - lead intake, triage and export
#[derive(Parser, Debug)]
#[command(name = "whatsflow")]
#[command(version, about, long_about = None)]
#[command(author = "WhatsFlow Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "whatsflow.toml", env = "WHATSFLOW_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error); overrides application.log_level
    #[arg(short, long, env = "WHATSFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all submissions to a file (csv, json, excel, pdf, word)
    Export(commands::export::ExportArgs),

    /// List submissions, newest first
    Submissions(commands::submissions::SubmissionsArgs),

    /// Show submission counters and the most recent submissions
    Dashboard(commands::dashboard::DashboardArgs),

    /// Record a contact-form submission
    Submit(commands::submit::SubmitArgs),

    /// Change the status of a submission
    UpdateStatus(commands::update_status::UpdateStatusArgs),

    /// Manage pricing plans
    Pricing(commands::pricing::PricingArgs),

    /// Create the database tables
    Migrate(commands::migrate::MigrateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

impl Commands {
    /// Whether the command reads the configuration file
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Init(_) | Commands::ValidateConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::pricing::PricingCommand;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["whatsflow", "export", "pdf"]);
        assert_eq!(cli.config, "whatsflow.toml");
        match cli.command {
            Commands::Export(args) => assert_eq!(args.format.as_deref(), Some("pdf")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "whatsflow",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "dashboard",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_cli_parse_update_status() {
        let cli = Cli::parse_from(["whatsflow", "update-status", "14", "contacted"]);
        match cli.command {
            Commands::UpdateStatus(args) => {
                assert_eq!(args.id, 14);
                assert_eq!(args.status, "contacted");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_pricing_update() {
        let cli = Cli::parse_from([
            "whatsflow",
            "pricing",
            "update",
            "2",
            "--base-price",
            "150",
            "--discount",
            "-10",
        ]);
        match cli.command {
            Commands::Pricing(args) => match args.command {
                PricingCommand::Update {
                    plan_id,
                    base_price,
                    discount,
                } => {
                    assert_eq!(plan_id, 2);
                    assert_eq!(base_price, Some(150.0));
                    assert_eq!(discount, -10);
                }
                other => panic!("unexpected pricing command {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init_and_validate() {
        let cli = Cli::parse_from(["whatsflow", "init"]);
        assert!(!cli.command.needs_config());
        let cli = Cli::parse_from(["whatsflow", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
        let cli = Cli::parse_from(["whatsflow", "submissions", "--status", "pending"]);
        assert!(cli.command.needs_config());
    }
}
