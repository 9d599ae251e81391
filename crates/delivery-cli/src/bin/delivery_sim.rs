//! Seed a delivery database with a generated scenario and report on it.
//!
//! The backend is chosen from the environment (`DELIVERY_DB_BACKEND`,
//! `DELIVERY_DB_CAPACITY`).

use clap::Parser;
use delivery_cli::Scenario;
use delivery_core::Location;
use delivery_store::{Database, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Drone delivery store simulator
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of drones
    #[arg(long, default_value_t = 4)]
    drones: usize,

    /// Number of delivery jobs
    #[arg(long, default_value_t = 10)]
    jobs: usize,

    /// Center latitude (default: Irvine, CA)
    #[arg(long, default_value_t = 33.6846)]
    lat: f64,

    /// Center longitude (default: Irvine, CA)
    #[arg(long, default_value_t = -117.8265)]
    lon: f64,

    /// Delivery area radius in meters
    #[arg(long, default_value_t = 2000.0)]
    radius_m: f64,

    /// Clear the database after reporting
    #[arg(long)]
    clear: bool,

    /// Print stats as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delivery_store=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = StoreConfig::from_env()?;
    let db = delivery_store::open_database(&config)?;

    let scenario = Scenario::generate(
        Location::new(args.lat, args.lon),
        args.drones,
        args.jobs,
        args.radius_m,
    );
    delivery_cli::seed_database(db.as_ref(), &scenario)?;

    report(db.as_ref(), args.json)?;

    if args.clear {
        db.clear()?;
        report(db.as_ref(), args.json)?;
    }

    Ok(())
}

fn report(db: &dyn Database, json: bool) -> anyhow::Result<()> {
    let stats = db.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\nDatabase: {}", stats.database_type);
    println!("Connected: {}", stats.connected);
    println!("Drones: {}  Jobs: {}", stats.drones, stats.jobs);

    let mut drones = db.drones().enumerate();
    drones.sort_by(|a, b| a.drone_id.cmp(&b.drone_id));
    for drone in drones {
        let jobs = delivery_store::jobs_for_drone(db.jobs(), &drone.drone_id);
        let distance_km: f64 = jobs.iter().map(|j| j.distance_m()).sum::<f64>() / 1000.0;
        println!(
            "  {} [{:?}] {} job(s), {:.2} km",
            drone.drone_id,
            drone.status,
            jobs.len(),
            distance_km
        );
    }
    Ok(())
}
