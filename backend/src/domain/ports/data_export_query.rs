//! Driving port for the admin analytics export.

use async_trait::async_trait;

use crate::domain::{DataExport, Error};

#[async_trait]
pub trait DataExportQuery: Send + Sync {
    /// Snapshot every collection when `presented_secret` matches the
    /// configured admin secret; otherwise fail with
    /// [`ErrorCode::Forbidden`](crate::domain::ErrorCode::Forbidden).
    async fn export(&self, presented_secret: Option<&str>) -> Result<DataExport, Error>;
}
