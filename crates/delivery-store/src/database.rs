//! The backend contract shared by every database implementation.

use delivery_core::{Drone, Job};
use serde::Serialize;
use tracing::info;

use crate::collection::RecordStore;
use crate::config::{BackendKind, StoreConfig, MAX_CAPACITY};
use crate::error::StoreError;
use crate::memory::InMemoryDatabase;

/// A storage backend holding the drones and jobs collections.
///
/// The backend owns both collections for its whole lifetime. They are
/// mutated in place and never swapped out.
pub trait Database: Send + Sync {
    /// Whether the backend can currently serve operations.
    fn is_connected(&self) -> bool;

    /// Empty both collections, jobs first since they reference drones.
    fn clear(&self) -> Result<(), StoreError>;

    /// Human-readable backend name, for diagnostics only.
    fn database_type(&self) -> &'static str;

    fn drones(&self) -> &dyn RecordStore<Drone>;

    fn jobs(&self) -> &dyn RecordStore<Job>;

    fn ensure_connected(&self) -> Result<(), StoreError> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(StoreError::Unavailable {
                backend: self.database_type(),
            })
        }
    }

    fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            database_type: self.database_type(),
            connected: self.is_connected(),
            drones: self.drones().len(),
            jobs: self.jobs().len(),
        }
    }
}

/// Point-in-time summary of a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub database_type: &'static str,
    pub connected: bool,
    pub drones: usize,
    pub jobs: usize,
}

/// Build the backend selected by `config`.
pub fn open_database(config: &StoreConfig) -> Result<Box<dyn Database>, StoreError> {
    if config.capacity > MAX_CAPACITY {
        return Err(StoreError::InvalidCapacity {
            requested: config.capacity,
            max: MAX_CAPACITY,
        });
    }

    let db: Box<dyn Database> = match config.backend {
        BackendKind::InMemory => Box::new(InMemoryDatabase::with_capacity(config.capacity)),
    };
    db.ensure_connected()?;

    info!("Opened {} database", db.database_type());
    Ok(db)
}

/// Clear `jobs` before `drones` so no job outlives the drone it names.
pub fn clear_dependents_first(jobs: &dyn RecordStore<Job>, drones: &dyn RecordStore<Drone>) {
    jobs.clear();
    drones.clear();
}

/// Jobs whose drone back-reference is `drone_id`.
pub fn jobs_for_drone(jobs: &dyn RecordStore<Job>, drone_id: &str) -> Vec<Job> {
    jobs.enumerate()
        .into_iter()
        .filter(|job| job.drone_id.as_deref() == Some(drone_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::InMemoryCollection;
    use delivery_core::{Location, Record};
    use std::sync::{Arc, Mutex};

    /// Collection that logs the kind of record it holds whenever it is cleared.
    struct RecordingStore<R> {
        inner: InMemoryCollection<R>,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl<R: Record> RecordStore<R> for RecordingStore<R> {
        fn insert(&self, record: R) -> Result<Option<R>, StoreError> {
            self.inner.insert(record)
        }

        fn lookup(&self, id: &str) -> Option<R> {
            self.inner.lookup(id)
        }

        fn enumerate(&self) -> Vec<R> {
            self.inner.enumerate()
        }

        fn clear(&self) {
            self.log.lock().unwrap().push(R::KIND);
            self.inner.clear();
        }

        fn remove(&self, id: &str) -> Option<R> {
            self.inner.remove(id)
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    /// Backend that has lost its connection.
    struct OfflineDatabase {
        drones: InMemoryCollection<Drone>,
        jobs: InMemoryCollection<Job>,
    }

    impl Database for OfflineDatabase {
        fn is_connected(&self) -> bool {
            false
        }

        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                backend: self.database_type(),
            })
        }

        fn database_type(&self) -> &'static str {
            "Offline"
        }

        fn drones(&self) -> &dyn RecordStore<Drone> {
            &self.drones
        }

        fn jobs(&self) -> &dyn RecordStore<Job> {
            &self.jobs
        }
    }

    #[test]
    fn disconnected_backend_reports_unavailable() {
        let db = OfflineDatabase {
            drones: InMemoryCollection::new(),
            jobs: InMemoryCollection::new(),
        };

        assert_eq!(
            db.ensure_connected().unwrap_err(),
            StoreError::Unavailable { backend: "Offline" }
        );
        assert!(db.clear().is_err());
        assert!(!db.stats().connected);
    }

    #[test]
    fn open_database_builds_in_memory_backend() {
        let db = open_database(&StoreConfig::default()).unwrap();
        assert!(db.is_connected());
        assert_eq!(db.database_type(), crate::IN_MEMORY_DATABASE_TYPE);
    }

    #[test]
    fn open_database_rejects_oversized_capacity() {
        let config = StoreConfig {
            capacity: usize::MAX,
            ..StoreConfig::default()
        };
        let err = open_database(&config).err().unwrap();
        assert_eq!(
            err,
            StoreError::InvalidCapacity {
                requested: usize::MAX,
                max: MAX_CAPACITY
            }
        );
    }

    #[test]
    fn clear_removes_jobs_before_drones() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let drones = RecordingStore::<Drone> {
            inner: InMemoryCollection::new(),
            log: Arc::clone(&log),
        };
        let jobs = RecordingStore::<Job> {
            inner: InMemoryCollection::new(),
            log: Arc::clone(&log),
        };
        let here = Location::new(33.6846, -117.8265);
        drones.insert(Drone::new("D1", here)).unwrap();
        let mut job = Job::new("J1", here, here);
        job.assign("D1");
        jobs.insert(job).unwrap();

        clear_dependents_first(&jobs, &drones);

        assert_eq!(*log.lock().unwrap(), vec!["job", "drone"]);
        assert!(jobs.is_empty());
        assert!(drones.is_empty());
    }

    #[test]
    fn jobs_for_drone_follows_back_reference() {
        let db = InMemoryDatabase::new();
        let here = Location::new(33.6846, -117.8265);

        let mut assigned = Job::new("JOB001", here, here.offset(800.0, 1.2));
        assigned.assign("DRONE001");
        db.jobs().insert(assigned).unwrap();
        db.jobs().insert(Job::new("JOB002", here, here)).unwrap();

        let jobs = jobs_for_drone(db.jobs(), "DRONE001");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_id, "JOB001");
        assert!(jobs_for_drone(db.jobs(), "DRONE002").is_empty());
    }
}
