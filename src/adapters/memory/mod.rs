//! In-memory record store
//!
//! Backs `database_target = "memory"` and the test suite. Contents live for the
//! lifetime of the process.

pub mod store;

pub use store::InMemoryStore;
