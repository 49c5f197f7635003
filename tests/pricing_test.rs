//! Pricing catalog behaviour through the public service API

use std::sync::Arc;
use test_case::test_case;
use whatsflow::adapters::memory::InMemoryStore;
use whatsflow::core::PricingService;
use whatsflow::domain::plan::{clamp_discount, discounted_price};
use whatsflow::domain::{format_price, PlanId, WhatsFlowError};

#[test_case(-20 => 0 ; "negative clamps to zero")]
#[test_case(0 => 0 ; "zero")]
#[test_case(35 => 35 ; "in range")]
#[test_case(100 => 100 ; "full discount")]
#[test_case(150 => 100 ; "above hundred clamps")]
fn test_clamp_discount(requested: i64) -> u8 {
    clamp_discount(requested)
}

#[test_case(62.0, 0, "62.00" ; "starter without discount")]
#[test_case(125.0, 20, "100.00" ; "pro at twenty percent")]
#[test_case(499.0, 15, "424.15" ; "business at fifteen percent")]
#[test_case(99.99, 100, "0.00" ; "free")]
#[test_case(10.0, 33, "6.70" ; "odd percentage")]
fn test_discounted_price(base: f64, percent: u8, expected: &str) {
    assert_eq!(format_price(discounted_price(base, percent)), expected);
}

async fn seeded_service() -> PricingService {
    let service = PricingService::new(Arc::new(InMemoryStore::new()));
    service.seed_default_catalog().await.unwrap();
    service
}

#[tokio::test]
async fn test_update_persists_and_recomputes() {
    let service = seeded_service().await;
    let business = PlanId::new(3).unwrap();

    let notice = service.update_plan(business, None, 250).await.unwrap();
    assert!(notice.is_success());
    assert_eq!(notice.message, "Business plan updated successfully!");

    let plans = service.list_plans().await.unwrap();
    let plan = &plans[2];
    assert_eq!(plan.discount_percent(), 100);
    assert_eq!(plan.current_price(), 0.0);
    assert_eq!(plan.base_price(), 499.0);
    assert!(plan.is_discounted());
}

#[tokio::test]
async fn test_update_leaves_other_plans_untouched() {
    let service = seeded_service().await;
    let before = service.list_plans().await.unwrap();

    service
        .update_plan(PlanId::new(1).unwrap(), Some(70.0), 10)
        .await
        .unwrap();

    let after = service.list_plans().await.unwrap();
    assert_eq!(format_price(after[0].current_price()), "63.00");
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], before[2]);
}

#[tokio::test]
async fn test_rejected_update_changes_nothing() {
    let service = seeded_service().await;

    let err = service
        .update_plan(PlanId::new(2).unwrap(), Some(f64::NAN), 10)
        .await
        .unwrap_err();
    assert!(matches!(err, WhatsFlowError::Validation(_)));

    let plans = service.list_plans().await.unwrap();
    assert_eq!(plans[1].discount_percent(), 0);
    assert_eq!(plans[1].current_price(), 125.0);
}
