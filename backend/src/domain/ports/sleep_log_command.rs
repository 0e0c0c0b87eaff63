//! Driving port for recording sleep entries.

use async_trait::async_trait;

use super::RecordedSleepEntry;
use crate::domain::{Error, NewSleepEntry};

/// Domain use-case port for sleep submissions.
#[async_trait]
pub trait SleepLogCommand: Send + Sync {
    /// Store the entry and apply the streak rule to its owner.
    async fn record(&self, entry: &NewSleepEntry) -> Result<RecordedSleepEntry, Error>;
}
