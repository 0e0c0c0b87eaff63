//! Gratitude journal domain services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    GratitudeCommand, GratitudeLogRepository, GratitudeLogRepositoryError, GratitudeQuery,
};
use crate::domain::{Error, GratitudeNote, NewGratitudeNote, UserId};

/// Gratitude service implementing the gratitude driving ports.
#[derive(Clone)]
pub struct GratitudeService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> GratitudeService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(err: GratitudeLogRepositoryError) -> Error {
    debug!(error = %err, "gratitude repository call failed");
    Error::operation_failed(err.to_string())
}

#[async_trait]
impl<R> GratitudeCommand for GratitudeService<R>
where
    R: GratitudeLogRepository + ?Sized,
{
    async fn record(&self, note: &NewGratitudeNote) -> Result<GratitudeNote, Error> {
        let stored = self
            .repo
            .append(note)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %note.user_id, date = %note.date, "recorded gratitude note");
        Ok(stored)
    }
}

#[async_trait]
impl<R> GratitudeQuery for GratitudeService<R>
where
    R: GratitudeLogRepository + ?Sized,
{
    async fn list(&self, user_id: &UserId) -> Result<Vec<GratitudeNote>, Error> {
        self.repo
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}
