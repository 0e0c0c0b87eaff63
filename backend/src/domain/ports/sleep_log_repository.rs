//! Port for sleep log persistence, including the streak side effect.

use async_trait::async_trait;

use crate::domain::{NewSleepEntry, SleepEntry, StreakUpdate, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by sleep log repository adapters.
    pub enum SleepLogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "sleep log repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "sleep log repository query failed: {message}",
    }
}

/// Outcome of appending a sleep entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSleepEntry {
    /// The stored entry.
    pub entry: SleepEntry,
    /// Streak change applied to the owning user; `None` when no user record
    /// exists for the entry's `user_id`.
    pub streak: Option<StreakUpdate>,
}

impl RecordedSleepEntry {
    /// Streak count after the write, zero when no user record was updated.
    #[must_use]
    pub fn streak_count(&self) -> u32 {
        self.streak.map_or(0, |update| update.current.count)
    }
}

/// Port for appending and reading sleep entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SleepLogRepository: Send + Sync {
    /// Append an entry and advance the owner's streak atomically.
    ///
    /// Implementations must serialise concurrent calls for the same user so
    /// no streak update is lost, and must not keep the entry when the streak
    /// write fails.
    async fn append_with_streak(
        &self,
        entry: &NewSleepEntry,
    ) -> Result<RecordedSleepEntry, SleepLogRepositoryError>;

    /// Entries for one user, oldest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SleepEntry>, SleepLogRepositoryError>;

    /// Every entry, oldest first.
    async fn list_all(&self) -> Result<Vec<SleepEntry>, SleepLogRepositoryError>;
}
