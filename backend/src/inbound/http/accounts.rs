//! Registration and login handlers.
//!
//! ```text
//! POST /auth/register {"email":"ada@example.com","password":"...","username":"Ada"}
//! POST /auth/login    {"email":"ada@example.com","password":"..."}
//! ```
//!
//! Both establish a cookie session for the returned `uid`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, INVALID_CREDENTIALS, LoginCredentials, NewAccount, UserId};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::records::ResponseStatus;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub const REGISTERED: &str = "User registered successfully";
pub const LOGGED_IN: &str = "Login successful";

/// Registration request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    #[schema(example = "Ada")]
    pub username: String,
    /// Free-form usage mode; defaults to `"General"`.
    #[serde(default)]
    pub mode: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful registration or login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AuthResponse {
    pub status: ResponseStatus,
    pub uid: String,
    pub message: String,
}

impl AuthResponse {
    fn new(uid: &UserId, message: &str) -> Self {
        Self {
            status: ResponseStatus::Success,
            uid: uid.to_string(),
            message: message.to_owned(),
        }
    }
}

/// Create an account and its user record, then start a session.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = AuthResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid input or account rejected", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    let RegisterRequest {
        email,
        password,
        username,
        mode,
    } = payload.into_inner();
    let account = NewAccount::try_from_parts(&email, &password, &username, mode.as_deref())
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let user_id = state.accounts.register(&account).await?;
    session.persist_user(&user_id)?;
    Ok(web::Json(AuthResponse::new(&user_id, REGISTERED)))
}

fn login_body_rejected(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "login rejected: undecodable body");
    Error::invalid_request(INVALID_CREDENTIALS).into()
}

/// JSON extractor settings for the login resource.
///
/// A body that fails to decode (bad syntax, a missing field, a non-string
/// password) gets the same reply as a wrong password.
pub fn login_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(login_body_rejected)
}

/// Verify credentials and start a session.
///
/// Malformed input and wrong credentials are indistinguishable to the client.
/// Mounted through [`login_json_config`] rather than the shared extractor
/// settings; see [`super::configure`].
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid Credentials", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AuthResponse>> {
    let request = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&request.email, &request.password).map_err(|err| {
            warn!(error = %err, "login rejected: malformed credentials");
            Error::invalid_request(INVALID_CREDENTIALS)
        })?;

    let user_id = state.accounts.login(&credentials).await?;
    session.persist_user(&user_id)?;
    Ok(web::Json(AuthResponse::new(&user_id, LOGGED_IN)))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
