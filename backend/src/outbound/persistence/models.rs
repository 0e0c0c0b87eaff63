//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{accounts, gratitude_logs, sleep_logs, users};

// ---------------------------------------------------------------------------
// Account models
// ---------------------------------------------------------------------------

/// Columns needed to verify a login.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountCredentialsRow {
    pub id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub display_name: &'a str,
}

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub mode: String,
    pub streak_count: i32,
    pub last_sleep_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub username: &'a str,
    pub mode: &'a str,
    pub streak_count: i32,
    pub last_sleep_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Streak columns locked and rewritten by the sleep log transaction.
#[derive(Debug, Clone, Copy, Queryable, Selectable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = true)]
pub(crate) struct StreakColumns {
    pub streak_count: i32,
    pub last_sleep_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Log models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sleep_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SleepLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hours: f64,
    pub quality: i16,
    pub mood: String,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sleep_logs)]
pub(crate) struct NewSleepLogRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hours: f64,
    pub quality: i16,
    pub mood: &'a str,
    pub entry_date: NaiveDate,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gratitude_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GratitudeLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = gratitude_logs)]
pub(crate) struct NewGratitudeLogRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: &'a str,
    pub entry_date: NaiveDate,
}
