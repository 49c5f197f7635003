//! Core business services
//!
//! - [`export`] - encoders, the format dispatcher and artifact staging
//! - [`triage`] - submission intake, status updates and dashboard counters
//! - [`pricing`] - pricing catalog seeding and discount updates
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use whatsflow::adapters::memory::InMemoryStore;
//! use whatsflow::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(InMemoryStore::new());
//! let coordinator = ExportCoordinator::new(store, "exports");
//!
//! let summary = coordinator.execute_export("pdf").await?;
//! summary.log_summary();
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod notice;
pub mod pricing;
pub mod triage;

pub use notice::{Notice, NoticeLevel};
pub use pricing::{default_catalog, PricingService};
pub use triage::{DashboardStats, LoggingNotifier, SubmissionNotifier, TriageService};
