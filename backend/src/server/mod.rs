//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use sleepease::ApiDoc;
use sleepease::app::{Adapters, build_app, build_http_state, session_middleware};
use sleepease::inbound::http::health::HealthState;
use sleepease::outbound::memory::InMemoryStore;

fn adapters(config: &ServerConfig) -> Adapters {
    match &config.db_pool {
        Some(pool) => Adapters::postgres(pool),
        None => {
            info!("no database configured; data is kept in process memory");
            let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
            Adapters::in_memory(Arc::new(InMemoryStore::new(clock.clone())), clock)
        }
    }
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(
        adapters(&config),
        config.admin_secret.clone(),
    ));
    let ServerConfig {
        session,
        bind_addr,
        admin_secret: _,
        db_pool: _,
    } = config;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = build_app(
            http_state.clone(),
            server_health_state.clone(),
            session_middleware(&session),
        );

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
