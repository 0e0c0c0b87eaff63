//! Driving port for listing gratitude notes.

use async_trait::async_trait;

use crate::domain::{Error, GratitudeNote, UserId};

#[async_trait]
pub trait GratitudeQuery: Send + Sync {
    /// Notes recorded for `user_id`, oldest first.
    async fn list(&self, user_id: &UserId) -> Result<Vec<GratitudeNote>, Error>;
}
