//! PostgreSQL-backed `GratitudeLogRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{GratitudeLogRepository, GratitudeLogRepositoryError};
use crate::domain::{GratitudeContent, GratitudeNote, NewGratitudeNote, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{GratitudeLogRow, NewGratitudeLogRow};
use super::pool::DbPool;
use super::schema::gratitude_logs;

/// Diesel-backed implementation of the gratitude log repository port.
#[derive(Clone)]
pub struct DieselGratitudeLogRepository {
    pool: DbPool,
}

impl DieselGratitudeLogRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, GratitudeLogRepositoryError::connection))?;
        let mut query = gratitude_logs::table
            .order((gratitude_logs::created_at.asc(), gratitude_logs::id.asc()))
            .select(GratitudeLogRow::as_select())
            .into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(gratitude_logs::user_id.eq(*user_id.as_uuid()));
        }
        let rows: Vec<GratitudeLogRow> = query.load(&mut conn).await.map_err(map_diesel)?;

        rows.into_iter().map(row_to_note).collect()
    }
}

fn map_diesel(error: diesel::result::Error) -> GratitudeLogRepositoryError {
    map_diesel_error(
        error,
        GratitudeLogRepositoryError::query,
        GratitudeLogRepositoryError::connection,
    )
}

fn row_to_note(row: GratitudeLogRow) -> Result<GratitudeNote, GratitudeLogRepositoryError> {
    let content = GratitudeContent::new(&row.content).map_err(|err| {
        GratitudeLogRepositoryError::query(format!(
            "stored gratitude note {} is invalid: {err}",
            row.id
        ))
    })?;
    Ok(GratitudeNote {
        id: row.id,
        user_id: UserId::from_uuid(row.user_id),
        content,
        date: row.entry_date,
        created_at: row.created_at,
    })
}

#[async_trait]
impl GratitudeLogRepository for DieselGratitudeLogRepository {
    async fn append(
        &self,
        note: &NewGratitudeNote,
    ) -> Result<GratitudeNote, GratitudeLogRepositoryError> {
        let new_row = NewGratitudeLogRow {
            id: Uuid::new_v4(),
            user_id: *note.user_id.as_uuid(),
            content: note.content.as_ref(),
            entry_date: note.date,
        };
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, GratitudeLogRepositoryError::connection))?;
        let row = diesel::insert_into(gratitude_logs::table)
            .values(&new_row)
            .returning(GratitudeLogRow::as_returning())
            .get_result::<GratitudeLogRow>(&mut conn)
            .await
            .map_err(map_diesel)?;

        row_to_note(row)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError> {
        self.load(Some(user_id)).await
    }

    async fn list_all(&self) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError> {
        self.load(None).await
    }
}
