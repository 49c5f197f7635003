//! Storage integrations for WhatsFlow.
//!
//! - [`database`] - Record store abstraction (trait-based) and factory
//! - [`postgresql`] - PostgreSQL implementation
//! - [`memory`] - In-memory implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing without a database. Services only see
//! `Arc<dyn RecordStore + Send + Sync>`.
//!
//! ```rust
//! use whatsflow::adapters::database::RecordStore;
//! use whatsflow::adapters::memory::InMemoryStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn RecordStore + Send + Sync> = Arc::new(InMemoryStore::new());
//! assert_eq!(store.backend_name(), "memory");
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;
