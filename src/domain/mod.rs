//! Domain models and types for WhatsFlow.
//!
//! This module contains the core domain models, types, and business rules for
//! WhatsFlow: contact-form submissions, their triage status, and the pricing
//! catalog.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`SubmissionId`], [`PlanId`])
//! - **Domain models** ([`Submission`], [`NewSubmission`], [`PricingPlan`])
//! - **Status lifecycle** ([`SubmissionStatus`])
//! - **Error types** ([`WhatsFlowError`], [`EncodingError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers are newtypes so a plan id can never be passed where a
//! submission id is expected:
//!
//! ```rust
//! use whatsflow::domain::{PlanId, SubmissionId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let submission_id = SubmissionId::new(12)?;
//! let plan_id = PlanId::new(2)?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: SubmissionId = plan_id;
//! # let _ = (submission_id, plan_id);
//! # Ok(())
//! # }
//! ```
//!
//! # Derived pricing
//!
//! A plan's current price is never set directly:
//!
//! ```rust
//! use whatsflow::domain::{PlanDefinition, PlanId, PricingPlan};
//! use chrono::Utc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut plan = PricingPlan::new(
//!     PlanId::new(1)?,
//!     PlanDefinition {
//!         plan_name: "Starter".to_string(),
//!         base_price: 62.0,
//!         discount_percent: 0,
//!         features: vec!["Auto-replies".to_string()],
//!         is_featured: false,
//!         checkout_url: None,
//!     },
//!     Utc::now(),
//! );
//! plan.apply_discount(50, Utc::now());
//! assert_eq!(plan.current_price(), 31.0);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod plan;
pub mod result;
pub mod status;
pub mod submission;

// Re-export commonly used types for convenience
pub use errors::{EncodingError, WhatsFlowError};
pub use ids::{PlanId, SubmissionId};
pub use plan::{format_price, PlanDefinition, PricingPlan};
pub use result::Result;
pub use status::SubmissionStatus;
pub use submission::{NewSubmission, NewSubmissionBuilder, Submission};
