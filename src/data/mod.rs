//! Data layer: workout catalogs and the SQLite counter store.
//!
//! Handles creating the counter tables, picking workouts, and reading or
//! resetting their selection counts.

mod catalog;
mod models;
mod storage;

pub use catalog::{default_catalogs, CORE, KB};
pub use storage::CounterStore;
