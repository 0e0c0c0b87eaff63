//! Admin analytics export.
//!
//! The export is all-or-nothing: a missing or mismatched secret yields
//! [`Error::forbidden`] without touching any repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    DataExportQuery, GratitudeLogRepository, SleepLogRepository, UserRepository,
};
use crate::domain::{AdminSecret, DataExport, Error};

/// Message returned when the presented secret is rejected.
pub const EXPORT_DENIED: &str = "Invalid admin secret";

/// Export service reading every collection.
#[derive(Clone)]
pub struct DataExportService<U: ?Sized, S: ?Sized, G: ?Sized> {
    users: Arc<U>,
    sleep_logs: Arc<S>,
    gratitude_logs: Arc<G>,
    secret: Option<AdminSecret>,
}

impl<U: ?Sized, S: ?Sized, G: ?Sized> DataExportService<U, S, G> {
    /// Create the service. With `secret` unset every export is denied.
    pub fn new(
        users: Arc<U>,
        sleep_logs: Arc<S>,
        gratitude_logs: Arc<G>,
        secret: Option<AdminSecret>,
    ) -> Self {
        Self {
            users,
            sleep_logs,
            gratitude_logs,
            secret,
        }
    }

    fn authorise(&self, presented: Option<&str>) -> Result<(), Error> {
        match (&self.secret, presented) {
            (Some(secret), Some(presented)) if secret.matches(presented) => Ok(()),
            (None, _) => {
                warn!("export rejected: no admin secret configured");
                Err(Error::forbidden(EXPORT_DENIED))
            }
            (Some(_), None) => {
                warn!("export rejected: admin secret header missing");
                Err(Error::forbidden(EXPORT_DENIED))
            }
            (Some(_), Some(_)) => {
                warn!("export rejected: admin secret mismatch");
                Err(Error::forbidden(EXPORT_DENIED))
            }
        }
    }
}

#[async_trait]
impl<U, S, G> DataExportQuery for DataExportService<U, S, G>
where
    U: UserRepository + ?Sized,
    S: SleepLogRepository + ?Sized,
    G: GratitudeLogRepository + ?Sized,
{
    async fn export(&self, presented_secret: Option<&str>) -> Result<DataExport, Error> {
        self.authorise(presented_secret)?;

        let users = self
            .users
            .list_all()
            .await
            .map_err(|err| Error::operation_failed(err.to_string()))?;
        let sleep_logs = self
            .sleep_logs
            .list_all()
            .await
            .map_err(|err| Error::operation_failed(err.to_string()))?;
        let gratitude_logs = self
            .gratitude_logs
            .list_all()
            .await
            .map_err(|err| Error::operation_failed(err.to_string()))?;

        info!(
            users = users.len(),
            sleep_logs = sleep_logs.len(),
            gratitude_logs = gratitude_logs.len(),
            "exported data snapshot"
        );
        Ok(DataExport {
            users,
            sleep_logs,
            gratitude_logs,
        })
    }
}
