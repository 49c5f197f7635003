//! Record store abstraction layer
//!
//! This module provides a trait-based abstraction for persistence, allowing
//! WhatsFlow to run against PostgreSQL or an in-memory store.

pub mod factory;
pub mod traits;

pub use factory::create_record_store;
pub use traits::{RecordStore, StatusUpdate};
