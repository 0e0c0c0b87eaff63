//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, DataExportQuery, GratitudeCommand, GratitudeQuery, MoodAdviceQuery,
    SleepLogCommand, SleepLogQuery, UserProfileQuery,
};

/// Dependency bundle for HTTP handlers.
///
/// Command and query sides are separate fields even when one service backs
/// both, so tests can stub them independently.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub profiles: Arc<dyn UserProfileQuery>,
    pub sleep_logs: Arc<dyn SleepLogCommand>,
    pub sleep_history: Arc<dyn SleepLogQuery>,
    pub gratitude: Arc<dyn GratitudeCommand>,
    pub gratitude_list: Arc<dyn GratitudeQuery>,
    pub mood: Arc<dyn MoodAdviceQuery>,
    pub export: Arc<dyn DataExportQuery>,
}
