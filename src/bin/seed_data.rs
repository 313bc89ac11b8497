//! Seed data script - fills the orders store with demo orders
//!
//! Run with: cargo run --bin seed-data -- --count 35
//!
//! Each order gets a weighted random status and a tracking history that
//! walks the parcel from pickup up to that status.

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use logistics_api::{
    config, db,
    models::timestamp::now_local,
    seed::{self, SeedGenerator},
};

#[derive(Parser)]
#[command(name = "seed-data", about = "Populate the logistics store with demo orders", version)]
struct Cli {
    #[arg(long, default_value_t = seed::DEFAULT_ORDER_COUNT, help = "Number of orders to generate")]
    count: usize,

    #[arg(long, help = "Database URL; defaults to the configured database_url")]
    database_url: Option<String>,

    #[arg(long, help = "Delete existing orders and tracking records first")]
    reset: bool,

    #[arg(long, help = "Seed for a reproducible batch")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (database_url, log_level, log_json) = match cli.database_url {
        Some(url) => (url, "info".to_string(), false),
        None => {
            let cfg = config::load_config()?;
            (cfg.database_url.clone(), cfg.log_level.clone(), cfg.log_json)
        }
    };
    config::init_tracing(&log_level, log_json);

    info!("=== Logistics demo data ===");
    info!("Connecting to database: {}", database_url);
    let pool = db::establish_connection(&database_url).await?;
    db::run_migrations(&pool).await?;

    if cli.reset {
        info!("Resetting existing data...");
        seed::reset(&pool).await?;
    }

    let rng = match cli.seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    };
    let mut generator = SeedGenerator::new(rng, now_local());

    let report = seed::seed_database(&pool, &mut generator, cli.count).await?;

    info!("=== Seed complete ===");
    info!("  Orders: {}", report.orders);
    info!("  Tracking records: {}", report.tracking_records);
    info!("Database: {}", database_url);

    Ok(())
}
