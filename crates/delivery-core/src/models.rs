//! Core data models for the delivery simulation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spatial::{haversine_distance, offset_by_bearing};

/// A record that can be stored under a string identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// Short name of the record kind, used in errors and logs.
    const KIND: &'static str;

    fn record_id(&self) -> &str;
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Distance to another location in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// Location reached by travelling `distance_m` along `bearing_rad`.
    pub fn offset(&self, distance_m: f64, bearing_rad: f64) -> Location {
        let (lat, lon) = offset_by_bearing(self.lat, self.lon, distance_m, bearing_rad);
        Location { lat, lon }
    }
}

/// A delivery drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub drone_id: String,
    pub status: DroneStatus,
    pub location: Location,
    /// Job currently being flown, if any
    #[serde(default)]
    pub job_id: Option<String>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneStatus {
    /// Idle and available for a job
    #[default]
    Ready,
    /// Flying to the pickup point
    GoingToPickup,
    /// Carrying a package to the dropoff point
    GoingToDropoff,
    Charging,
    Offline,
}

impl Drone {
    /// Create an idle drone at the given location.
    pub fn new(drone_id: impl Into<String>, location: Location) -> Self {
        Self {
            drone_id: drone_id.into(),
            status: DroneStatus::Ready,
            location,
            job_id: None,
            last_update: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == DroneStatus::Ready && self.job_id.is_none()
    }

    /// Take on a job and head for its pickup point.
    pub fn start_job(&mut self, job_id: impl Into<String>) {
        self.job_id = Some(job_id.into());
        self.status = DroneStatus::GoingToPickup;
        self.last_update = Utc::now();
    }
}

impl Record for Drone {
    const KIND: &'static str = "drone";

    fn record_id(&self) -> &str {
        &self.drone_id
    }
}

/// A package delivery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    pub pickup: Location,
    pub dropoff: Location,
    /// Drone assigned to this job; references a drone record by ID
    #[serde(default)]
    pub drone_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Waiting for a drone
    #[default]
    Waiting,
    Assigned,
    InTransit,
    Delivered,
    Cancelled,
}

impl Job {
    pub fn new(job_id: impl Into<String>, pickup: Location, dropoff: Location) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Waiting,
            pickup,
            dropoff,
            drone_id: None,
            created_at: Utc::now(),
        }
    }

    /// Assign a drone to this job.
    pub fn assign(&mut self, drone_id: impl Into<String>) {
        self.drone_id = Some(drone_id.into());
        self.status = JobStatus::Assigned;
    }

    /// Straight-line pickup to dropoff distance in meters.
    pub fn distance_m(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, JobStatus::Delivered | JobStatus::Cancelled)
    }
}

impl Record for Job {
    const KIND: &'static str = "job";

    fn record_id(&self) -> &str {
        &self.job_id
    }
}
