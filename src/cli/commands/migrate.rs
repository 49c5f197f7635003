//! Migrate command implementation
//!
//! Creates the users, submissions and pricing_plans tables when missing.

use super::{report_failure, CommandContext};
use crate::core::pricing::PricingService;
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Also insert the default pricing catalog when it is empty
    #[arg(long)]
    pub seed: bool,
}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };

        println!("🗄️  Applying schema to {} store...", ctx.store.backend_name());
        if let Err(e) = ctx.store.ensure_schema().await {
            return Ok(report_failure("Migration", &e));
        }
        println!("✅ Schema is up to date");

        if self.seed {
            match PricingService::new(ctx.store).seed_default_catalog().await {
                Ok(count) => println!("✅ Seeded {count} pricing plans"),
                Err(e) => return Ok(report_failure("Seeding", &e)),
            }
        }

        Ok(0)
    }
}
