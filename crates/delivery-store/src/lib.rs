//! Storage layer for the delivery simulation.
//!
//! A [`Database`] owns one drones collection and one jobs collection and
//! reports whether it is usable. [`InMemoryDatabase`] keeps both collections
//! in DashMaps; other backends implement the same trait.

pub mod collection;
pub mod config;
pub mod database;
pub mod error;
pub mod memory;

pub use collection::{InMemoryCollection, RecordStore};
pub use config::{BackendKind, StoreConfig, MAX_CAPACITY};
pub use database::{
    clear_dependents_first, jobs_for_drone, open_database, Database, DatabaseStats,
};
pub use error::StoreError;
pub use memory::{InMemoryDatabase, IN_MEMORY_DATABASE_TYPE};
