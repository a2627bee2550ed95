//! Service entry-point: loads settings, prepares the SQLite database and
//! serves the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use xp_tracker::inbound::http::health::HealthState;
use xp_tracker::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use xp_tracker::settings::load_settings;

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

    let settings = load_settings(std::env::args_os())?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::other(format!("invalid bind address {}: {e}", settings.host()))
    })?;

    let pool = DbPool::new(
        PoolConfig::new(settings.database_path()).with_max_size(settings.pool_max_size),
    )
    .await
    .map_err(std::io::Error::other)?;
    ensure_schema(&pool).await.map_err(std::io::Error::other)?;
    info!(database_path = settings.database_path(), "database ready");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    server.await
}
