pub mod models;
pub mod spatial;

pub use models::{Drone, DroneStatus, Job, JobStatus, Location, Record};
pub use spatial::{haversine_distance, offset_by_bearing};
