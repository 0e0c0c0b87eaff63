//! Gratitude journal handlers.
//!
//! ```text
//! POST /gratitude/add {"user_id":"...","content":"...","date":"2024-01-01"}
//! GET  /gratitude/list?user_id=...
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, Error, GratitudeContent, LogValidationError, NewGratitudeNote, parse_calendar_date,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::records::{GratitudeRecord, ResponseStatus};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::sleep::OwnerQuery;
use crate::inbound::http::state::HttpState;

pub const GRATITUDE_SAVED: &str = "Gratitude saved successfully";

/// Gratitude submission body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddGratitudeRequest {
    pub user_id: String,
    pub content: String,
    #[schema(example = "2024-01-01")]
    pub date: String,
}

/// Acknowledgement of a stored note.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddGratitudeResponse {
    pub status: ResponseStatus,
    pub message: String,
}

/// Notes, oldest first.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct GratitudeListResponse {
    pub status: ResponseStatus,
    pub data: Vec<GratitudeRecord>,
}

#[utoipa::path(
    post,
    path = "/gratitude/add",
    request_body = AddGratitudeRequest,
    responses(
        (status = 200, description = "Stored", body = AddGratitudeResponse),
        (status = 400, description = "Invalid input or store failure", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 403, description = "user_id is not the session user", body = ErrorBody)
    ),
    tags = ["gratitude"],
    operation_id = "addGratitude"
)]
#[post("/gratitude/add")]
pub async fn add_gratitude(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AddGratitudeRequest>,
) -> ApiResult<web::Json<AddGratitudeResponse>> {
    let request = payload.into_inner();
    let user_id = session.require_owner(&request.user_id)?;
    let invalid = |err: LogValidationError| Error::invalid_request(err.to_string());
    let note = NewGratitudeNote {
        user_id,
        content: GratitudeContent::new(&request.content).map_err(invalid)?,
        date: parse_calendar_date(&request.date).map_err(invalid)?,
    };

    state.gratitude.record(&note).await?;
    Ok(web::Json(AddGratitudeResponse {
        status: ResponseStatus::Success,
        message: GRATITUDE_SAVED.to_owned(),
    }))
}

#[utoipa::path(
    get,
    path = "/gratitude/list",
    params(OwnerQuery),
    responses(
        (status = 200, description = "Notes", body = GratitudeListResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 403, description = "user_id is not the session user", body = ErrorBody)
    ),
    tags = ["gratitude"],
    operation_id = "listGratitude"
)]
#[get("/gratitude/list")]
pub async fn list_gratitude(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<OwnerQuery>,
) -> ApiResult<web::Json<GratitudeListResponse>> {
    let user_id = session.require_owner(&query.user_id)?;
    let notes = state.gratitude_list.list(&user_id).await?;
    Ok(web::Json(GratitudeListResponse {
        status: ResponseStatus::Success,
        data: notes.into_iter().map(GratitudeRecord::from).collect(),
    }))
}

#[cfg(test)]
#[path = "gratitude_tests.rs"]
mod tests;
