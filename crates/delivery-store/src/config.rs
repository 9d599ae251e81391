//! Store configuration from environment.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::error::StoreError;

/// Available database backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    InMemory,
}

impl FromStr for BackendKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(BackendKind::InMemory),
            _ => Err(StoreError::UnknownBackend(s.to_string())),
        }
    }
}

/// Largest collection pre-size accepted from configuration.
pub const MAX_CAPACITY: usize = 1 << 20;

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub backend: BackendKind,
    /// Initial capacity of each collection (0 = grow on demand)
    pub capacity: usize,
}

impl StoreConfig {
    /// Read `DELIVERY_DB_BACKEND` and `DELIVERY_DB_CAPACITY`.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    ///
    /// A missing or unusable capacity falls back to 0. An unknown backend
    /// name is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let backend = match lookup("DELIVERY_DB_BACKEND") {
            Some(name) => name.parse()?,
            None => BackendKind::default(),
        };
        let capacity = lookup("DELIVERY_DB_CAPACITY")
            .and_then(|s| match s.parse::<usize>() {
                Ok(n) if n <= MAX_CAPACITY => Some(n),
                Ok(n) => {
                    warn!("DELIVERY_DB_CAPACITY {} exceeds {}, ignoring", n, MAX_CAPACITY);
                    None
                }
                Err(_) => {
                    warn!("Ignoring invalid DELIVERY_DB_CAPACITY '{}'", s);
                    None
                }
            })
            .unwrap_or(0);

        Ok(Self { backend, capacity })
    }
}
