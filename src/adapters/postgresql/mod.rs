//! PostgreSQL database integration
//!
//! This module provides the PostgreSQL-backed record store for submissions and
//! the pricing catalog.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::{PostgreSQLPlan, PostgreSQLSubmission};
