//! Baseline persistence: SQLite initialization and the store contract.

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{BaselineStore, StoredBaseline};
