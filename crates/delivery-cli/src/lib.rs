//! Delivery CLI - simulation driver for the delivery store.
//!
//! Binaries:
//! - delivery_sim: seed a backend with drones and jobs and report on it

pub mod sim;

pub use sim::{seed_database, Scenario};
