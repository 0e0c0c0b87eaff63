//! Flat snapshot of every collection for analytics.

use super::{GratitudeNote, SleepEntry, UserProfile};

/// All users, sleep logs, and gratitude logs, unfiltered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataExport {
    pub users: Vec<UserProfile>,
    pub sleep_logs: Vec<SleepEntry>,
    pub gratitude_logs: Vec<GratitudeNote>,
}
