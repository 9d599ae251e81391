//! Generated delivery scenarios.

use delivery_core::{Drone, Job, Location};
use delivery_store::{Database, StoreError};
use rand::Rng;
use std::f64::consts::TAU;
use tracing::info;

/// A batch of drones and jobs to load into a database.
pub struct Scenario {
    pub drones: Vec<Drone>,
    pub jobs: Vec<Job>,
}

impl Scenario {
    /// Build a scenario around `center`.
    ///
    /// Drones are spaced evenly on a ring at half the radius. Jobs get random
    /// pickup and dropoff points inside the radius and are handed to drones
    /// round-robin; each drone starts flying its first job.
    pub fn generate(center: Location, drone_count: usize, job_count: usize, radius_m: f64) -> Self {
        let mut drones: Vec<Drone> = (0..drone_count)
            .map(|i| {
                let bearing = TAU * i as f64 / drone_count as f64;
                Drone::new(
                    format!("DRONE{:03}", i + 1),
                    center.offset(radius_m / 2.0, bearing),
                )
            })
            .collect();

        let mut rng = rand::rng();
        let mut jobs = Vec::with_capacity(job_count);
        for i in 0..job_count {
            let pickup = random_point(&mut rng, center, radius_m);
            let dropoff = random_point(&mut rng, center, radius_m);
            let mut job = Job::new(format!("JOB{:03}", i + 1), pickup, dropoff);

            if !drones.is_empty() {
                let drone = &mut drones[i % drone_count];
                job.assign(drone.drone_id.clone());
                if drone.is_available() {
                    drone.start_job(job.job_id.clone());
                }
            }
            jobs.push(job);
        }

        Self { drones, jobs }
    }
}

fn random_point(rng: &mut impl Rng, center: Location, radius_m: f64) -> Location {
    // sqrt keeps points uniform over the disc area
    let distance = radius_m * rng.random_range(0.0..=1.0_f64).sqrt();
    let bearing = rng.random_range(0.0..TAU);
    center.offset(distance, bearing)
}

/// Insert every drone and job of `scenario` into `db`.
pub fn seed_database(db: &dyn Database, scenario: &Scenario) -> Result<(), StoreError> {
    db.ensure_connected()?;

    for drone in &scenario.drones {
        db.drones().insert(drone.clone())?;
    }
    for job in &scenario.jobs {
        db.jobs().insert(job.clone())?;
    }

    info!(
        drones = scenario.drones.len(),
        jobs = scenario.jobs.len(),
        "Seeded {} database",
        db.database_type()
    );
    Ok(())
}
