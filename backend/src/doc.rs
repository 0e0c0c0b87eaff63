//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request and response DTOs and the session cookie security scheme.
//! Swagger UI serves it in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ErrorCode, StreakState, StreakTransition};
use crate::inbound::http::accounts::{AuthResponse, LoginRequest, RegisterRequest};
use crate::inbound::http::admin::ExportResponse;
use crate::inbound::http::chat::{ChatRequest, ChatResponse};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::gratitude::{
    AddGratitudeRequest, AddGratitudeResponse, GratitudeListResponse,
};
use crate::inbound::http::health::BannerResponse;
use crate::inbound::http::records::{
    ExportRecord, GratitudeRecord, ResponseStatus, SleepRecord, UserRecord,
};
use crate::inbound::http::sleep::{AddSleepRequest, AddSleepResponse, SleepHistoryResponse};
use crate::inbound::http::users::CurrentUserResponse;

/// Name of the session cookie security scheme.
pub const SESSION_SECURITY_SCHEME: &str = "SessionCookie";

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SESSION_SECURITY_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /auth/register and POST /auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "SleepEase backend API",
        description = "Sleep and gratitude journaling with streak tracking and mood advice."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::accounts::register,
        crate::inbound::http::accounts::login,
        crate::inbound::http::users::current_user,
        crate::inbound::http::sleep::add_sleep,
        crate::inbound::http::sleep::sleep_history,
        crate::inbound::http::gratitude::add_gratitude,
        crate::inbound::http::gratitude::list_gratitude,
        crate::inbound::http::chat::chat,
        crate::inbound::http::admin::export_data,
    ),
    components(schemas(
        ErrorBody,
        ErrorCode,
        ResponseStatus,
        BannerResponse,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        UserRecord,
        CurrentUserResponse,
        AddSleepRequest,
        AddSleepResponse,
        SleepRecord,
        SleepHistoryResponse,
        StreakState,
        StreakTransition,
        AddGratitudeRequest,
        AddGratitudeResponse,
        GratitudeRecord,
        GratitudeListResponse,
        ChatRequest,
        ChatResponse,
        ExportRecord,
        ExportResponse,
    )),
    tags(
        (name = "health", description = "Banner and probes"),
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "The authenticated user"),
        (name = "sleep", description = "Sleep logs and streaks"),
        (name = "gratitude", description = "Gratitude journal"),
        (name = "chat", description = "Mood advice"),
        (name = "admin", description = "Analytics export")
    )
)]
pub struct ApiDoc;
