//! Backend entry-point: loads configuration, migrates the schema, and serves
//! the role-gated REST API.

mod server;

use std::time::Duration;

use actix_web::web;
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hms_backend::inbound::http::health::HealthState;
use hms_backend::inbound::http::session_config::{
    BuildMode, SessionSettings, key_fingerprint, session_settings_from_env,
};
use hms_backend::outbound::persistence::{DbPool, PoolConfig};

use server::{AppSettings, ServerConfig, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

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

    let settings = AppSettings::load()
        .map_err(|error| std::io::Error::other(format!("load configuration: {error}")))?;
    let bootstrap_admin = settings.bootstrap_admin()?;
    let database_url = settings.database_url()?.to_owned();

    let SessionSettings {
        key,
        cookie_secure,
        same_site,
    } = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|error| std::io::Error::other(format!("session configuration: {error}")))?;
    info!(key_fingerprint = %key_fingerprint(&key), "session key loaded");

    let applied = run_migrations(database_url.clone()).await?;
    info!(applied, "database migrations complete");

    let mut pool_config = PoolConfig::new(&database_url);
    if let Some(max_size) = settings.pool_max_size {
        pool_config = pool_config.with_max_size(max_size);
    }
    if let Some(secs) = settings.pool_timeout_secs {
        pool_config = pool_config.with_connection_timeout(Duration::from_secs(secs));
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|error| std::io::Error::other(format!("create database pool: {error}")))?;
    pool.get()
        .await
        .map_err(|error| std::io::Error::other(format!("verify database connection: {error}")))?;
    info!("database connection verified");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        key,
        cookie_secure,
        same_site,
        settings.bind_addr(),
        pool,
        bootstrap_admin,
    );
    create_server(health_state, config)?.await
}

/// Apply pending embedded migrations, returning how many ran.
///
/// Migrations use a dedicated synchronous connection on a blocking thread so
/// the async runtime is not stalled during schema changes.
async fn run_migrations(database_url: String) -> std::io::Result<usize> {
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url)
            .map_err(|error| std::io::Error::other(format!("connect for migrations: {error}")))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|error| std::io::Error::other(format!("apply migrations: {error}")))?;
        Ok(applied.len())
    })
    .await
    .map_err(|error| std::io::Error::other(format!("migration task failed: {error}")))?
}
