//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, StreakState, UserId, UserMode, UserProfile, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Convert a database row into a validated domain profile.
pub(crate) fn row_to_profile(row: UserRow) -> Result<UserProfile, UserPersistenceError> {
    let UserRow {
        id,
        email,
        username,
        mode,
        streak_count,
        last_sleep_date,
        created_at,
    } = row;
    let invalid = |err: crate::domain::UserValidationError| {
        UserPersistenceError::query(format!("stored user {id} is invalid: {err}"))
    };
    let count = u32::try_from(streak_count)
        .map_err(|_| UserPersistenceError::query(format!("stored user {id} has negative streak")))?;

    Ok(UserProfile {
        id: UserId::from_uuid(id),
        email: Email::new(email).map_err(invalid)?,
        username: Username::new(username).map_err(invalid)?,
        mode: UserMode::from_optional(Some(mode.as_str())).map_err(invalid)?,
        streak: StreakState::from_parts(count, last_sleep_date),
        created_at,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &UserProfile) -> Result<(), UserPersistenceError> {
        let streak_count = i32::try_from(user.streak.count)
            .map_err(|_| UserPersistenceError::query("streak count overflow"))?;
        let row = NewUserRow {
            id: *user.id.as_uuid(),
            email: user.email.as_ref(),
            username: user.username.as_ref(),
            mode: user.mode.as_ref(),
            streak_count,
            last_sleep_date: user.streak.last_sleep_date,
            created_at: user.created_at,
        };

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;
        let row = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        row.map(row_to_profile).transpose()
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;
        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        rows.into_iter().map(row_to_profile).collect()
    }
}
