//! Scenario seeding for simulation runs.

pub mod scenarios;

pub use scenarios::{seed_database, Scenario};
