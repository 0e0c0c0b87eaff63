//! Sleep log domain services.
//!
//! Recording an entry is the one write with a side effect: the owning user's
//! streak advances in the same repository call that stores the entry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    RecordedSleepEntry, SleepLogCommand, SleepLogQuery, SleepLogRepository,
    SleepLogRepositoryError,
};
use crate::domain::{Error, NewSleepEntry, SleepEntry, UserId};

/// Sleep log service implementing the sleep driving ports.
#[derive(Clone)]
pub struct SleepLogService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> SleepLogService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(err: SleepLogRepositoryError) -> Error {
    debug!(error = %err, "sleep log repository call failed");
    Error::operation_failed(err.to_string())
}

#[async_trait]
impl<R> SleepLogCommand for SleepLogService<R>
where
    R: SleepLogRepository + ?Sized,
{
    async fn record(&self, entry: &NewSleepEntry) -> Result<RecordedSleepEntry, Error> {
        let recorded = self
            .repo
            .append_with_streak(entry)
            .await
            .map_err(map_repository_error)?;

        match recorded.streak {
            Some(update) => info!(
                user_id = %entry.user_id,
                date = %entry.date,
                transition = ?update.transition,
                streak_count = update.current.count,
                "recorded sleep entry"
            ),
            None => info!(
                user_id = %entry.user_id,
                date = %entry.date,
                "recorded sleep entry for unknown user; streak untouched"
            ),
        }
        Ok(recorded)
    }
}

#[async_trait]
impl<R> SleepLogQuery for SleepLogService<R>
where
    R: SleepLogRepository + ?Sized,
{
    async fn history(&self, user_id: &UserId) -> Result<Vec<SleepEntry>, Error> {
        self.repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}
