//! Database maintenance commands.

use clap::Subcommand;
use permitdb_core::{fallback, AppConfig};

/// Sub-commands available under `db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert the built-in Georgia office dataset
    Seed,
}

/// Connect using `DATABASE_URL` and run one maintenance command.
///
/// # Errors
///
/// Returns an error if no database is configured, the connection fails, or
/// the command itself fails.
pub(crate) async fn run_db_command(
    config: &AppConfig,
    command: DbCommands,
) -> anyhow::Result<()> {
    let pool = permitdb_db::connect_pool_from_config(config).await?;

    match command {
        DbCommands::Ping => {
            permitdb_db::health_check(&pool).await?;
            println!("database ok");
        }
        DbCommands::Migrate => {
            let applied = permitdb_db::run_migrations(&pool).await?;
            println!("applied {applied} migration(s)");
        }
        DbCommands::Seed => {
            let offices = fallback::offices();
            let count = permitdb_db::upsert_permit_offices(&pool, &offices).await?;
            tracing::info!(count, "seeded permit offices");
            println!("seeded {count} permit office(s)");
        }
    }

    Ok(())
}
