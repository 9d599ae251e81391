//! In-memory backend using DashMap collections.

use delivery_core::{Drone, Job};
use tracing::debug;

use crate::collection::{InMemoryCollection, RecordStore};
use crate::database::{clear_dependents_first, Database};
use crate::error::StoreError;

pub const IN_MEMORY_DATABASE_TYPE: &str = "In-memory collections";

/// Database held entirely in process memory. Always connected.
pub struct InMemoryDatabase {
    drones: InMemoryCollection<Drone>,
    jobs: InMemoryCollection<Job>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self {
            drones: InMemoryCollection::new(),
            jobs: InMemoryCollection::new(),
        }
    }

    /// Pre-size both collections.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            drones: InMemoryCollection::with_capacity(capacity),
            jobs: InMemoryCollection::with_capacity(capacity),
        }
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for InMemoryDatabase {
    fn is_connected(&self) -> bool {
        true
    }

    fn clear(&self) -> Result<(), StoreError> {
        let jobs = self.jobs.len();
        let drones = self.drones.len();

        clear_dependents_first(&self.jobs, &self.drones);

        debug!(jobs, drones, "Cleared in-memory database");
        Ok(())
    }

    fn database_type(&self) -> &'static str {
        IN_MEMORY_DATABASE_TYPE
    }

    fn drones(&self) -> &dyn RecordStore<Drone> {
        &self.drones
    }

    fn jobs(&self) -> &dyn RecordStore<Job> {
        &self.jobs
    }
}
