//! Sleep log handlers.
//!
//! ```text
//! POST /sleep/add {"user_id":"...","hours":7.5,"quality":8,"mood":"rested","date":"2024-01-01"}
//! GET  /sleep/history?user_id=...
//! ```
//!
//! Both require a session whose user matches `user_id`.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ApiResult, Error, LogValidationError, MoodLabel, NewSleepEntry, SleepHours, SleepQuality,
    UserId, parse_calendar_date,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::records::{ResponseStatus, SleepRecord};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub const SLEEP_SAVED: &str = "Sleep data saved successfully";

/// Sleep submission body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddSleepRequest {
    pub user_id: String,
    #[schema(example = 7.5)]
    pub hours: f64,
    /// Integer in `1..=10`.
    #[schema(example = 8)]
    pub quality: i64,
    /// Required; may be an empty string.
    #[schema(example = "rested")]
    pub mood: String,
    #[schema(example = "2024-01-01")]
    pub date: String,
}

impl AddSleepRequest {
    fn into_entry(self, user_id: UserId) -> Result<NewSleepEntry, LogValidationError> {
        Ok(NewSleepEntry {
            user_id,
            hours: SleepHours::new(self.hours)?,
            quality: SleepQuality::new(self.quality)?,
            mood: MoodLabel::new(&self.mood)?,
            date: parse_calendar_date(&self.date)?,
        })
    }
}

/// Response to a stored sleep entry.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddSleepResponse {
    pub status: ResponseStatus,
    pub message: String,
    /// Streak after applying this entry; `0` when the user record is missing.
    pub streak_count: u32,
}

/// Query string naming the log owner.
#[derive(Debug, Deserialize, Serialize, IntoParams)]
pub struct OwnerQuery {
    pub user_id: String,
}

/// Sleep history, oldest first.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SleepHistoryResponse {
    pub status: ResponseStatus,
    pub data: Vec<SleepRecord>,
}

/// Store a sleep entry and update the owner's streak.
#[utoipa::path(
    post,
    path = "/sleep/add",
    request_body = AddSleepRequest,
    responses(
        (status = 200, description = "Stored", body = AddSleepResponse),
        (status = 400, description = "Invalid input or store failure", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 403, description = "user_id is not the session user", body = ErrorBody)
    ),
    tags = ["sleep"],
    operation_id = "addSleep"
)]
#[post("/sleep/add")]
pub async fn add_sleep(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<AddSleepRequest>,
) -> ApiResult<web::Json<AddSleepResponse>> {
    let request = payload.into_inner();
    let user_id = session.require_owner(&request.user_id)?;
    let entry = request
        .into_entry(user_id)
        .map_err(|err| Error::invalid_request(err.to_string()))?;

    let recorded = state.sleep_logs.record(&entry).await?;
    Ok(web::Json(AddSleepResponse {
        status: ResponseStatus::Success,
        message: SLEEP_SAVED.to_owned(),
        streak_count: recorded.streak_count(),
    }))
}

/// List the caller's sleep entries.
#[utoipa::path(
    get,
    path = "/sleep/history",
    params(OwnerQuery),
    responses(
        (status = 200, description = "History", body = SleepHistoryResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
        (status = 401, description = "Login required", body = ErrorBody),
        (status = 403, description = "user_id is not the session user", body = ErrorBody)
    ),
    tags = ["sleep"],
    operation_id = "sleepHistory"
)]
#[get("/sleep/history")]
pub async fn sleep_history(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<OwnerQuery>,
) -> ApiResult<web::Json<SleepHistoryResponse>> {
    let user_id = session.require_owner(&query.user_id)?;
    let entries = state.sleep_history.history(&user_id).await?;
    Ok(web::Json(SleepHistoryResponse {
        status: ResponseStatus::Success,
        data: entries.into_iter().map(SleepRecord::from).collect(),
    }))
}

#[cfg(test)]
#[path = "sleep_tests.rs"]
mod tests;
