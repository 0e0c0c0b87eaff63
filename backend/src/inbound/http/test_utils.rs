//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::Clock;
use serde_json::json;

use super::accounts::AuthResponse;
use super::configure;
use super::health::HealthState;
use super::state::HttpState;
use crate::Trace;
use crate::app::{Adapters, build_http_state};
use crate::domain::AdminSecret;
use crate::outbound::memory::InMemoryStore;
use crate::test_support::MutableClock;

/// Cookie name used by the session middleware.
pub const SESSION_COOKIE: &str = "session";

/// Fixed signing key so separately initialised test apps accept each other's
/// cookies.
pub fn test_session_key() -> Key {
    Key::from(&[7_u8; 64])
}

/// Build a session middleware configured for tests.
///
/// The cookie is named `session` and the `Secure` flag is disabled for local
/// HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), test_session_key())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by `response`.
///
/// # Panics
/// Panics when the response did not set a session cookie.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Handler state over a fresh in-memory store and a fixed clock.
pub fn memory_state(admin_secret: Option<AdminSecret>) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(MutableClock::default());
    let store = Arc::new(InMemoryStore::new(clock.clone()));
    web::Data::new(build_http_state(
        Adapters::in_memory(store, clock),
        admin_secret,
    ))
}

/// Every route over `state`, wrapped in tracing and test sessions.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::Data::new(HealthState::new()))
        .wrap(test_session_middleware())
        .wrap(Trace)
        .configure(configure)
}

/// Register `email` and return the new user id with its session cookie.
pub async fn register_user(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    email: &str,
) -> (String, Cookie<'static>) {
    let request = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "email": email,
            "password": "correct horse battery",
            "username": "Sleeper",
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "registration succeeds");
    let cookie = session_cookie(&response);
    let body: AuthResponse = test::read_body_json(response).await;
    (body.uid, cookie)
}
