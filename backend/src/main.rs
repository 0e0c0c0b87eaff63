//! Backend entry-point: loads configuration, prepares storage, and serves the
//! REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use sleepease::inbound::http::admin_config::admin_secret_from_env;
use sleepease::inbound::http::health::HealthState;
use sleepease::inbound::http::session_config::{BuildMode, session_settings_from_env};
use sleepease::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use sleepease::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let mode = BuildMode::from_debug_assertions();
    let env = DefaultEnv::new();

    let session = session_settings_from_env(&env, mode).wrap_err("invalid session settings")?;
    info!(
        fingerprint = %session.key_fingerprint(),
        cookie_secure = session.cookie_secure,
        "session key loaded"
    );
    let admin_secret = admin_secret_from_env(&env, mode).wrap_err("invalid admin secret")?;

    let mut config =
        ServerConfig::new(session, settings.bind_addr()).with_admin_secret(admin_secret);
    if let Some(url) = settings.database_url() {
        run_pending_migrations(url)
            .await
            .wrap_err("failed to apply database migrations")?;
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
            .await
            .wrap_err("failed to build database pool")?;
        info!(max_size = settings.pool_max_size(), "database pool ready");
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    server.await.wrap_err("HTTP server failed")
}
