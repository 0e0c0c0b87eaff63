//! Driving port for recording gratitude notes.

use async_trait::async_trait;

use crate::domain::{Error, GratitudeNote, NewGratitudeNote};

#[async_trait]
pub trait GratitudeCommand: Send + Sync {
    /// Store a note.
    async fn record(&self, note: &NewGratitudeNote) -> Result<GratitudeNote, Error>;
}
