//! Driving port for reading a user's sleep history.

use async_trait::async_trait;

use crate::domain::{Error, SleepEntry, UserId};

#[async_trait]
pub trait SleepLogQuery: Send + Sync {
    /// Entries recorded for `user_id`, oldest first.
    async fn history(&self, user_id: &UserId) -> Result<Vec<SleepEntry>, Error>;
}
