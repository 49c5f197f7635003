//! Pricing catalog maintenance

use crate::adapters::database::RecordStore;
use crate::core::notice::Notice;
use crate::domain::{PlanDefinition, PlanId, PricingPlan, Result};
use chrono::Utc;
use std::sync::Arc;

/// The three plans offered out of the box
pub fn default_catalog() -> Vec<PlanDefinition> {
    let plan = |name: &str, price: f64, featured: bool, features: [&str; 5], slug: &str| {
        PlanDefinition {
            plan_name: name.to_string(),
            base_price: price,
            discount_percent: 0,
            features: features.iter().map(|f| f.to_string()).collect(),
            is_featured: featured,
            checkout_url: Some(format!("https://chariow.com/checkout/placeholder-{slug}")),
        }
    };

    vec![
        plan(
            "Starter",
            62.0,
            false,
            [
                "Basic AI WhatsApp automation",
                "Auto-replies",
                "Basic lead capture",
                "Email support",
                "1 Connected Number",
            ],
            "starter",
        ),
        plan(
            "Pro",
            125.0,
            true,
            [
                "Everything in Starter",
                "Lead qualification",
                "Appointment scheduling",
                "Multi-agent support",
                "Priority support",
            ],
            "pro",
        ),
        plan(
            "Business",
            499.0,
            false,
            [
                "Everything in Pro",
                "Full funnel setup",
                "Custom tone training",
                "Unlimited contacts",
                "Dedicated account rep",
            ],
            "business",
        ),
    ]
}

/// Admin operations on pricing plans
pub struct PricingService {
    store: Arc<dyn RecordStore + Send + Sync>,
}

impl PricingService {
    pub fn new(store: Arc<dyn RecordStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// Inserts [`default_catalog`] when the catalog is empty
    ///
    /// Returns the number of plans inserted (zero when plans already exist).
    pub async fn seed_default_catalog(&self) -> Result<usize> {
        if !self.store.list_plans().await?.is_empty() {
            tracing::debug!("Pricing catalog already populated, skipping seed");
            return Ok(0);
        }

        let catalog = default_catalog();
        let count = catalog.len();
        for definition in catalog {
            let plan = self.store.insert_plan(definition).await?;
            tracing::info!(plan_id = %plan.id(), plan = plan.plan_name(), "Seeded pricing plan");
        }
        Ok(count)
    }

    /// Plans in id order
    pub async fn list_plans(&self) -> Result<Vec<PricingPlan>> {
        self.store.list_plans().await
    }

    /// Sets a plan's base price (if given) and discount, then persists it
    ///
    /// The discount is clamped into 0..=100.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown plan and `Validation` for a negative
    /// or non-finite base price.
    pub async fn update_plan(
        &self,
        plan_id: PlanId,
        base_price: Option<f64>,
        discount_percent: i64,
    ) -> Result<Notice> {
        let mut plan = self.store.get_plan(plan_id).await?;
        plan.reprice(base_price, discount_percent, Utc::now())?;
        self.store.save_plan(&plan).await?;

        tracing::info!(
            plan_id = %plan_id,
            base_price = plan.base_price(),
            discount_percent = plan.discount_percent(),
            current_price = plan.current_price(),
            "Pricing plan updated"
        );

        Ok(Notice::success(format!(
            "{} plan updated successfully!",
            plan.plan_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::WhatsFlowError;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        for plan in &catalog {
            plan.validate().unwrap();
            assert_eq!(plan.features.len(), 5);
        }
        assert_eq!(catalog.iter().filter(|p| p.is_featured).count(), 1);
        assert!(catalog[1].is_featured);
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let service = PricingService::new(Arc::new(InMemoryStore::new()));
        assert_eq!(service.seed_default_catalog().await.unwrap(), 3);
        assert_eq!(service.seed_default_catalog().await.unwrap(), 0);

        let names: Vec<String> = service
            .list_plans()
            .await
            .unwrap()
            .iter()
            .map(|p| p.plan_name().to_string())
            .collect();
        assert_eq!(names, vec!["Starter", "Pro", "Business"]);
    }

    #[tokio::test]
    async fn test_update_plan() {
        let service = PricingService::new(Arc::new(InMemoryStore::new()));
        service.seed_default_catalog().await.unwrap();
        let pro = PlanId::new(2).unwrap();

        let notice = service.update_plan(pro, Some(150.0), 20).await.unwrap();
        assert_eq!(notice.message, "Pro plan updated successfully!");

        let plans = service.list_plans().await.unwrap();
        assert_eq!(plans[1].base_price(), 150.0);
        assert!((plans[1].current_price() - 120.0).abs() < 1e-9);

        service.update_plan(pro, None, -5).await.unwrap();
        let plans = service.list_plans().await.unwrap();
        assert_eq!(plans[1].discount_percent(), 0);
        assert!((plans[1].current_price() - 150.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_update_plan_errors() {
        let service = PricingService::new(Arc::new(InMemoryStore::new()));
        service.seed_default_catalog().await.unwrap();

        let err = service
            .update_plan(PlanId::new(42).unwrap(), None, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, WhatsFlowError::NotFound(_)));

        let err = service
            .update_plan(PlanId::new(1).unwrap(), Some(-1.0), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, WhatsFlowError::Validation(_)));
        let plans = service.list_plans().await.unwrap();
        assert_eq!(plans[0].base_price(), 62.0);
    }
}
