//! Current-user handler.
//!
//! ```text
//! GET /users/me
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::records::{ResponseStatus, UserRecord};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Profile of the session user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub status: ResponseStatus,
    pub data: UserRecord,
}

/// Return the authenticated user's record, including streak fields.
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current user", body = CurrentUserResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
        (status = 401, description = "Login required or profile missing", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<CurrentUserResponse>> {
    let user_id = session.require_user_id()?;
    let profile = state.profiles.fetch_profile(&user_id).await?;
    Ok(web::Json(CurrentUserResponse {
        status: ResponseStatus::Success,
        data: profile.into(),
    }))
}
