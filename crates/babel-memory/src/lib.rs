//! # babel-memory
//!
//! Language preference storage for Babel: SQLite for real deployments,
//! an in-process map for tests and throwaway runs.

pub mod memory;
pub mod store;

pub use memory::InMemoryStore;
pub use store::SqliteStore;
