// WhatsFlow - Lead intake, triage and export for WhatsApp automation sales
// Copyright (c) 2025 WhatsFlow Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use whatsflow::cli::{Cli, Commands};
use whatsflow::config::{load_config, LoggingConfig};
use whatsflow::logging::init_logging;

#[tokio::main]
async fn main() {
    // Optional; a missing .env is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // File logging follows the config when it loads; commands report load errors themselves
    let loaded = if cli.command.needs_config() {
        load_config(&cli.config).ok()
    } else {
        None
    };
    let (config_level, logging_config) = match &loaded {
        Some(config) => (config.application.log_level.clone(), config.logging.clone()),
        None => (
            "info".to_string(),
            LoggingConfig {
                local_enabled: false,
                ..LoggingConfig::default()
            },
        ),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "WhatsFlow");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(_guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::Submissions(args) => args.execute(&cli.config).await,
        Commands::Dashboard(args) => args.execute(&cli.config).await,
        Commands::Submit(args) => args.execute(&cli.config).await,
        Commands::UpdateStatus(args) => args.execute(&cli.config).await,
        Commands::Pricing(args) => args.execute(&cli.config).await,
        Commands::Migrate(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
    }
}
