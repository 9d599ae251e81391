//! Error types for store operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given identifier
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    /// Backend cannot serve requests right now
    #[error("{backend} database is not connected")]
    Unavailable { backend: &'static str },
    /// Records must carry a non-empty identifier
    #[error("{kind} record has an empty identifier")]
    InvalidId { kind: &'static str },
    #[error("capacity {requested} exceeds the maximum of {max}")]
    InvalidCapacity { requested: usize, max: usize },
    #[error("unknown database backend '{0}'")]
    UnknownBackend(String),
}
