//! Analytics export handler.
//!
//! ```text
//! GET /admin/export_data
//! admin_secret: <secret>
//! ```

use actix_web::{HttpRequest, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::records::{ExportRecord, ResponseStatus};
use crate::inbound::http::state::HttpState;

/// Request header carrying the admin secret.
pub const ADMIN_SECRET_HEADER: &str = "admin_secret";

/// Full dump of users, sleep logs, and gratitude logs.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExportResponse {
    pub status: ResponseStatus,
    pub data: ExportRecord,
}

/// Export every collection when the `admin_secret` header matches.
///
/// A missing, non-UTF-8, or wrong header yields `403` with no data.
#[utoipa::path(
    get,
    path = "/admin/export_data",
    params(("admin_secret" = String, Header, description = "Configured admin secret")),
    responses(
        (status = 200, description = "Export", body = ExportResponse),
        (status = 400, description = "Store failure", body = ErrorBody),
        (status = 403, description = "Invalid admin secret", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "exportData",
    security([])
)]
#[get("/admin/export_data")]
pub async fn export_data(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<web::Json<ExportResponse>> {
    let presented = request
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    let export = state.export.export(presented).await?;
    Ok(web::Json(ExportResponse {
        status: ResponseStatus::Success,
        data: export.into(),
    }))
}
