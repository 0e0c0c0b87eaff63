//! Shared helpers for the HTTP integration suites.
//!
//! Integration tests compile as separate crates, so the application is
//! assembled here from the public `app` module over the in-memory adapters.

use std::sync::Arc;

use actix_http::Request;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

use sleepease::app::{Adapters, SESSION_COOKIE_NAME, build_app, build_http_state, session_middleware};
use sleepease::domain::AdminSecret;
use sleepease::inbound::http::health::HealthState;
use sleepease::inbound::http::session_config::SessionSettings;
use sleepease::outbound::memory::InMemoryStore;

pub const PASSWORD: &str = "correct horse battery";
pub const ADMIN_SECRET: &str = "integration-admin-secret-0123456789";

fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::from(&[42_u8; 64]),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

/// Full application over a fresh in-memory store with the admin export enabled.
pub fn memory_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    let state = build_http_state(
        Adapters::in_memory(store, clock),
        Some(AdminSecret::from_bytes(ADMIN_SECRET.as_bytes())),
    );
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    build_app(
        web::Data::new(state),
        health,
        session_middleware(&session_settings()),
    )
}

/// Session cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Register `email` and return its uid and session cookie.
pub async fn register(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    email: &str,
) -> (String, Cookie<'static>) {
    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": email, "password": PASSWORD, "username": "Sleeper"}))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let body: Value = test::read_body_json(response).await;
    let uid = body
        .get("uid")
        .and_then(Value::as_str)
        .expect("uid in registration response")
        .to_owned();
    (uid, cookie)
}
