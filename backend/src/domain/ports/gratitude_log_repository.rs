//! Port for gratitude note persistence.

use async_trait::async_trait;

use crate::domain::{GratitudeNote, NewGratitudeNote, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by gratitude log repository adapters.
    pub enum GratitudeLogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "gratitude log repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "gratitude log repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GratitudeLogRepository: Send + Sync {
    /// Append a note and return it with its server-assigned fields.
    async fn append(
        &self,
        note: &NewGratitudeNote,
    ) -> Result<GratitudeNote, GratitudeLogRepositoryError>;

    /// Notes for one user, oldest first.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError>;

    /// Every note, oldest first.
    async fn list_all(&self) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError>;
}
