mod api;
mod middleware;

use std::sync::Arc;

use permitdb_core::{AppConfig, Environment, OfficeSearch, OfficeStore};
use permitdb_db::PgOfficeStore;
use permitdb_geocode::GeocodeResolver;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = permitdb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = connect_store(&config).await?;
    let store = pool
        .clone()
        .map(|pool| Arc::new(PgOfficeStore::new(pool)) as Arc<dyn OfficeStore>);
    let search = OfficeSearch::new(store)
        .with_default_state(&config.default_state)
        .with_limit(config.search_limit);
    let geocoder = GeocodeResolver::from_config(&config)?;

    let app = build_app(AppState {
        search: Arc::new(search),
        geocoder: Arc::new(geocoder),
        pool,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "permitdb-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Connects and migrates the office database when one is configured.
///
/// Outside production an unreachable database is logged and the server runs
/// on the fallback dataset alone.
async fn connect_store(config: &AppConfig) -> anyhow::Result<Option<PgPool>> {
    if config.database_url.is_none() {
        tracing::warn!("DATABASE_URL not set; office search will use the fallback dataset");
        return Ok(None);
    }

    let connected = async {
        let pool = permitdb_db::connect_pool_from_config(config).await?;
        let applied = permitdb_db::run_migrations(&pool).await?;
        tracing::info!(applied, "database migrations complete");
        Ok::<_, anyhow::Error>(pool)
    }
    .await;

    match connected {
        Ok(pool) => Ok(Some(pool)),
        Err(e) if config.env != Environment::Production => {
            tracing::warn!(
                error = %e,
                "database unavailable; office search will use the fallback dataset"
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
