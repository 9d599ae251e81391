//! Keyed record collections.

use dashmap::DashMap;
use delivery_core::Record;

use crate::config::MAX_CAPACITY;
use crate::error::StoreError;

/// A collection of records addressed by their identifier.
///
/// Every operation is synchronous and individually thread-safe. There is no
/// atomicity across calls.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Store a record under its identifier, replacing any previous one.
    ///
    /// Returns the replaced record. An empty identifier is rejected.
    fn insert(&self, record: R) -> Result<Option<R>, StoreError>;

    /// Get a record by ID.
    fn lookup(&self, id: &str) -> Option<R>;

    /// Snapshot of all records, in no particular order.
    fn enumerate(&self) -> Vec<R>;

    /// Remove every record. Calling it on an empty collection is a no-op.
    fn clear(&self);

    fn remove(&self, id: &str) -> Option<R>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// Like [`lookup`](Self::lookup), but absence is an error.
    fn require(&self, id: &str) -> Result<R, StoreError> {
        self.lookup(id).ok_or_else(|| StoreError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        })
    }
}

/// Record collection held in a DashMap.
pub struct InMemoryCollection<R> {
    records: DashMap<String, R>,
}

impl<R: Record> InMemoryCollection<R> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Pre-size the map, capped at [`MAX_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity.min(MAX_CAPACITY)),
        }
    }
}

impl<R: Record> Default for InMemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for InMemoryCollection<R> {
    fn insert(&self, record: R) -> Result<Option<R>, StoreError> {
        if record.record_id().is_empty() {
            return Err(StoreError::InvalidId { kind: R::KIND });
        }
        let id = record.record_id().to_string();
        Ok(self.records.insert(id, record))
    }

    fn lookup(&self, id: &str) -> Option<R> {
        self.records.get(id).map(|r| r.value().clone())
    }

    fn enumerate(&self) -> Vec<R> {
        self.records.iter().map(|r| r.value().clone()).collect()
    }

    fn clear(&self) {
        self.records.clear();
    }

    fn remove(&self, id: &str) -> Option<R> {
        self.records.remove(id).map(|(_, record)| record)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}
