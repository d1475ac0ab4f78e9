//! Petfinder entry-point: loads settings, prepares the database and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use petfinder::inbound::http::health::HealthState;
use petfinder::outbound::persistence::{DbPool, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let database_url = settings.database_url()?;
    let bind_addr = settings.bind_addr()?;

    if settings.run_migrations {
        let applied = run_pending_migrations(database_url)
            .await
            .map_err(|err| std::io::Error::other(format!("migrations failed: {err}")))?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("database pool setup failed: {err}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))?;
    info!(%bind_addr, "petfinder listening");

    let result = server.await;
    health_state.mark_unhealthy();
    info!("petfinder stopped");
    result
}
