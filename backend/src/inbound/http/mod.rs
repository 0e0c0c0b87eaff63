//! HTTP inbound adapter exposing the REST endpoints.

pub mod accounts;
pub mod admin;
pub mod admin_config;
pub mod chat;
pub mod error;
pub mod gratitude;
pub mod health;
pub mod records;
pub mod session;
pub mod session_config;
pub mod sleep;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

/// Register every handler together with the extractor error configuration.
///
/// Handlers expect `web::Data<HttpState>` and the probes expect
/// `web::Data<HealthState>`; a session middleware must wrap the scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .service(health::root)
        .service(health::ready)
        .service(health::live)
        .service(accounts::register)
        .service(
            web::resource("/auth/login")
                .app_data(accounts::login_json_config())
                .route(web::post().to(accounts::login)),
        )
        .service(users::current_user)
        .service(sleep::add_sleep)
        .service(sleep::sleep_history)
        .service(gratitude::add_gratitude)
        .service(gratitude::list_gratitude)
        .service(chat::chat)
        .service(admin::export_data);
}
