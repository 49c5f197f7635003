//! Pricing command implementation

use super::{report_failure, CommandContext};
use crate::core::pricing::PricingService;
use crate::domain::{format_price, PlanId, PricingPlan};
use clap::{Args, Subcommand};

/// Arguments for the pricing command
#[derive(Args, Debug)]
pub struct PricingArgs {
    #[command(subcommand)]
    pub command: PricingCommand,
}

/// Pricing subcommands
#[derive(Subcommand, Debug)]
pub enum PricingCommand {
    /// List plans in id order
    List,

    /// Change a plan's base price and/or discount
    Update {
        /// Plan id
        plan_id: i64,

        /// New base price; keeps the current one when omitted
        #[arg(long)]
        base_price: Option<f64>,

        /// Discount percent, clamped into 0..=100
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        discount: i64,
    },

    /// Insert the default catalog if no plans exist
    Seed,
}

impl PricingArgs {
    /// Execute the pricing command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let ctx = match CommandContext::open(config_path).await {
            Ok(ctx) => ctx,
            Err(code) => return Ok(code),
        };
        let service = PricingService::new(ctx.store);

        match &self.command {
            PricingCommand::List => match service.list_plans().await {
                Ok(plans) if plans.is_empty() => {
                    println!("No pricing plans. Run 'whatsflow pricing seed' to add the defaults.");
                    Ok(0)
                }
                Ok(plans) => {
                    println!("💰 Pricing plans");
                    for plan in &plans {
                        println!("{}", format_plan(plan));
                    }
                    Ok(0)
                }
                Err(e) => Ok(report_failure("Listing plans", &e)),
            },
            PricingCommand::Update {
                plan_id,
                base_price,
                discount,
            } => {
                let plan_id = match PlanId::new(*plan_id) {
                    Ok(id) => id,
                    Err(e) => {
                        println!("❌ {e}");
                        return Ok(2);
                    }
                };
                match service.update_plan(plan_id, *base_price, *discount).await {
                    Ok(notice) => {
                        println!("✅ {notice}");
                        Ok(0)
                    }
                    Err(e) => Ok(report_failure("Plan update", &e)),
                }
            }
            PricingCommand::Seed => match service.seed_default_catalog().await {
                Ok(0) => {
                    println!("Pricing catalog already populated; nothing to seed.");
                    Ok(0)
                }
                Ok(count) => {
                    println!("✅ Seeded {count} pricing plans");
                    Ok(0)
                }
                Err(e) => Ok(report_failure("Seeding", &e)),
            },
        }
    }
}

pub(crate) fn format_plan(plan: &PricingPlan) -> String {
    let mut line = format!(
        "  #{} {}{}: ${}",
        plan.id(),
        plan.plan_name(),
        if plan.is_featured() { " (featured)" } else { "" },
        format_price(plan.current_price())
    );
    if plan.is_discounted() {
        line.push_str(&format!(
            " (was ${}, {}% off)",
            format_price(plan.base_price()),
            plan.discount_percent()
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanDefinition;
    use chrono::Utc;

    #[test]
    fn test_format_plan_shows_discount() {
        let plan = PricingPlan::new(
            PlanId::new(2).unwrap(),
            PlanDefinition {
                plan_name: "Pro".to_string(),
                base_price: 125.0,
                discount_percent: 20,
                features: vec![],
                is_featured: true,
                checkout_url: None,
            },
            Utc::now(),
        );
        assert_eq!(
            format_plan(&plan),
            "  #2 Pro (featured): $100.00 (was $125.00, 20% off)"
        );
    }
}
