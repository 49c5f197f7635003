// WhatsFlow - Lead intake, triage and export for WhatsApp automation sales
// Copyright (c) 2025 WhatsFlow Contributors
// Licensed under the MIT License

//! # WhatsFlow
//!
//! Back office for a WhatsApp-automation agency: prospects submit a contact
//! form, staff triage the submissions, adjust the pricing catalog, and export
//! the submission list in five document formats.
//!
//! ## Architecture
//!
//! - [`domain`] - Submissions, status lifecycle, pricing plans, errors
//! - [`adapters`] - Record stores (PostgreSQL, in-memory)
//! - [`core`] - Export encoders and dispatcher, triage, pricing
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line admin surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use whatsflow::adapters::memory::InMemoryStore;
//! use whatsflow::core::export::{export, ExportOutcome};
//! use whatsflow::core::TriageService;
//! use whatsflow::domain::NewSubmission;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let triage = TriageService::new(store);
//!
//!     let form = NewSubmission::builder()
//!         .full_name("Ada Obi")
//!         .business_name("Obi Textiles")
//!         .email("ada@obitextiles.com")
//!         .whatsapp_number("+2348012345678")
//!         .country("Nigeria")
//!         .plan_selected("Pro")
//!         .build()?;
//!     triage.create_submission(form).await?;
//!
//!     let records = triage.list_submissions(None).await?;
//!     if let ExportOutcome::Exported(artifact) = export("pdf", &records)? {
//!         std::fs::write(artifact.file_name(), artifact.payload())?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error is
//! [`domain::WhatsFlowError`]. An unknown export format is not an error: the
//! dispatcher returns [`core::export::ExportOutcome::Unsupported`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
