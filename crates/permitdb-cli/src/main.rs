mod db;
mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::db::DbCommands;

#[derive(Debug, Parser)]
#[command(name = "permitdb-cli")]
#[command(about = "Permit office locator command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode an address through the provider chain and print the result
    Geocode {
        /// Free-text street address
        address: String,
    },
    /// Search permit offices and print the ranked results
    Search {
        /// Case-insensitive city substring
        #[arg(long)]
        city: Option<String>,
        /// Case-insensitive county substring
        #[arg(long)]
        county: Option<String>,
        /// Two-letter state code (defaults to PERMITDB_DEFAULT_STATE)
        #[arg(long)]
        state: Option<String>,
        /// Latitude of the point to rank from
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude of the point to rank from
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Maximum rows read from the database
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = permitdb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Geocode { address }) => lookup::run_geocode(&config, &address).await?,
        Some(Commands::Search {
            city,
            county,
            state,
            lat,
            lng,
            limit,
        }) => {
            let filters = permitdb_core::OfficeFilters {
                state,
                city,
                county,
            };
            let point = lat
                .zip(lng)
                .map(|(lat, lng)| permitdb_core::GeoPoint { lat, lng });
            lookup::run_search(&config, &filters, point, limit).await?;
        }
        Some(Commands::Db { command }) => db::run_db_command(&config, command).await?,
        None => println!("permitdb-cli: run with --help to list commands"),
    }

    Ok(())
}
