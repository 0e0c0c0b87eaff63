//! Mood chat handler.
//!
//! ```text
//! POST /ai/chat {"message":"I slept terribly"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::MoodAdvice;
use crate::inbound::http::records::ResponseStatus;
use crate::inbound::http::state::HttpState;

/// Chat body. `message` may be missing, `null`, or of any JSON type; only a
/// string is analysed.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "I had a lovely evening")]
    pub message: Option<Value>,
}

impl ChatRequest {
    fn text(&self) -> Option<&str> {
        self.message.as_ref().and_then(Value::as_str)
    }
}

/// Fixed reply chosen by sentiment.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatResponse {
    pub status: ResponseStatus,
    pub reply: String,
}

impl From<MoodAdvice> for ChatResponse {
    fn from(advice: MoodAdvice) -> Self {
        Self {
            status: ResponseStatus::Success,
            reply: advice.message().to_owned(),
        }
    }
}

/// Reply to free text with comforting, motivating, or neutral advice.
#[utoipa::path(
    post,
    path = "/ai/chat",
    request_body = ChatRequest,
    responses((status = 200, description = "Advice", body = ChatResponse)),
    tags = ["chat"],
    operation_id = "chat",
    security([])
)]
#[post("/ai/chat")]
pub async fn chat(
    state: web::Data<HttpState>,
    payload: web::Json<ChatRequest>,
) -> web::Json<ChatResponse> {
    web::Json(state.mood.advise(payload.text()).into())
}
