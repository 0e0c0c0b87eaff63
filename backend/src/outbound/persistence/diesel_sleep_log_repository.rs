//! PostgreSQL-backed `SleepLogRepository` implementation using Diesel ORM.
//!
//! Appending an entry and advancing the owner's streak share one
//! transaction. The user row is locked with `SELECT ... FOR UPDATE` before the
//! streak is read, so concurrent submissions for the same user serialise and
//! a failed streak write rolls the insert back.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{RecordedSleepEntry, SleepLogRepository, SleepLogRepositoryError};
use crate::domain::{
    MoodLabel, NewSleepEntry, SleepEntry, SleepHours, SleepQuality, StreakState, UserId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewSleepLogRow, SleepLogRow, StreakColumns};
use super::pool::DbPool;
use super::schema::{sleep_logs, users};

/// Diesel-backed implementation of the sleep log repository port.
#[derive(Clone)]
pub struct DieselSleepLogRepository {
    pool: DbPool,
}

impl DieselSleepLogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<Vec<SleepEntry>, SleepLogRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SleepLogRepositoryError::connection))?;
        let mut query = sleep_logs::table
            .order((sleep_logs::created_at.asc(), sleep_logs::id.asc()))
            .select(SleepLogRow::as_select())
            .into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(sleep_logs::user_id.eq(*user_id.as_uuid()));
        }
        let rows: Vec<SleepLogRow> = query.load(&mut conn).await.map_err(map_diesel)?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

fn map_diesel(error: diesel::result::Error) -> SleepLogRepositoryError {
    map_diesel_error(
        error,
        SleepLogRepositoryError::query,
        SleepLogRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain entry.
fn row_to_entry(row: SleepLogRow) -> Result<SleepEntry, SleepLogRepositoryError> {
    let SleepLogRow {
        id,
        user_id,
        hours,
        quality,
        mood,
        entry_date,
        created_at,
    } = row;
    let invalid = |err: crate::domain::LogValidationError| {
        SleepLogRepositoryError::query(format!("stored sleep entry {id} is invalid: {err}"))
    };

    Ok(SleepEntry {
        id,
        user_id: UserId::from_uuid(user_id),
        hours: SleepHours::new(hours).map_err(invalid)?,
        quality: SleepQuality::new(i64::from(quality)).map_err(invalid)?,
        mood: MoodLabel::new(mood).map_err(invalid)?,
        date: entry_date,
        created_at,
    })
}

fn streak_from_columns(columns: StreakColumns) -> StreakState {
    // The CHECK constraint keeps the count non-negative.
    let count = u32::try_from(columns.streak_count).unwrap_or(0);
    StreakState::from_parts(count, columns.last_sleep_date)
}

fn streak_to_columns(state: StreakState) -> StreakColumns {
    StreakColumns {
        streak_count: i32::try_from(state.count).unwrap_or(i32::MAX),
        last_sleep_date: state.last_sleep_date,
    }
}

#[async_trait]
impl SleepLogRepository for DieselSleepLogRepository {
    async fn append_with_streak(
        &self,
        entry: &NewSleepEntry,
    ) -> Result<RecordedSleepEntry, SleepLogRepositoryError> {
        let user_uuid = *entry.user_id.as_uuid();
        let new_row = NewSleepLogRow {
            id: Uuid::new_v4(),
            user_id: user_uuid,
            hours: entry.hours.get(),
            quality: i16::from(entry.quality.get()),
            mood: entry.mood.as_ref(),
            entry_date: entry.date,
        };
        let date = entry.date;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SleepLogRepositoryError::connection))?;

        let (row, streak) = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(sleep_logs::table)
                        .values(&new_row)
                        .returning(SleepLogRow::as_returning())
                        .get_result::<SleepLogRow>(conn)
                        .await?;

                    let current = users::table
                        .filter(users::id.eq(user_uuid))
                        .select(StreakColumns::as_select())
                        .for_update()
                        .load::<StreakColumns>(conn)
                        .await?
                        .into_iter()
                        .next();

                    let Some(current) = current else {
                        return Ok((row, None));
                    };

                    let update = streak_from_columns(current).advance(date);
                    if update.transition.mutates() {
                        diesel::update(users::table.filter(users::id.eq(user_uuid)))
                            .set(&streak_to_columns(update.current))
                            .execute(conn)
                            .await?;
                    }
                    Ok::<_, diesel::result::Error>((row, Some(update)))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel)?;

        Ok(RecordedSleepEntry {
            entry: row_to_entry(row)?,
            streak,
        })
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SleepEntry>, SleepLogRepositoryError> {
        self.load(Some(user_id)).await
    }

    async fn list_all(&self) -> Result<Vec<SleepEntry>, SleepLogRepositoryError> {
        self.load(None).await
    }
}
