//! JSON representations of stored records and the shared response envelope.
//!
//! Field names are snake_case; timestamps render as RFC 3339 strings and
//! calendar dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{DataExport, GratitudeNote, SleepEntry, UserProfile};

/// Envelope status of every successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
}

/// User record with its streak fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub email: String,
    pub username: String,
    #[schema(example = "General")]
    pub mode: String,
    pub streak_count: u32,
    pub last_sleep_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserRecord {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            username: user.username.to_string(),
            mode: user.mode.as_ref().to_owned(),
            streak_count: user.streak.count,
            last_sleep_date: user.streak.last_sleep_date,
            created_at: user.created_at,
        }
    }
}

/// One night's sleep log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SleepRecord {
    pub id: Uuid,
    pub user_id: String,
    #[schema(example = 7.5)]
    pub hours: f64,
    #[schema(example = 8)]
    pub quality: u8,
    pub mood: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<SleepEntry> for SleepRecord {
    fn from(entry: SleepEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id.to_string(),
            hours: entry.hours.get(),
            quality: entry.quality.get(),
            mood: entry.mood.as_ref().to_owned(),
            date: entry.date,
            created_at: entry.created_at,
        }
    }
}

/// One gratitude journal note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GratitudeRecord {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<GratitudeNote> for GratitudeRecord {
    fn from(note: GratitudeNote) -> Self {
        Self {
            id: note.id,
            user_id: note.user_id.to_string(),
            content: note.content.as_ref().to_owned(),
            date: note.date,
            created_at: note.created_at,
        }
    }
}

/// Every collection, unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExportRecord {
    pub users: Vec<UserRecord>,
    pub sleep_logs: Vec<SleepRecord>,
    pub gratitude_logs: Vec<GratitudeRecord>,
}

impl From<DataExport> for ExportRecord {
    fn from(export: DataExport) -> Self {
        Self {
            users: export.users.into_iter().map(UserRecord::from).collect(),
            sleep_logs: export.sleep_logs.into_iter().map(SleepRecord::from).collect(),
            gratitude_logs: export
                .gratitude_logs
                .into_iter()
                .map(GratitudeRecord::from)
                .collect(),
        }
    }
}
