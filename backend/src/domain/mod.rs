//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed values validated at construction, the
//! streak rule, and the services implementing the driving ports. Nothing in
//! this module knows about HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - UserProfile, SleepEntry, GratitudeNote: stored records.
//! - StreakState: consecutive-day counter and its update rule.
//! - MoodAdvice / Polarity: chat advice chosen by sentiment sign.
//! - Services: AccountService, SleepLogService, GratitudeService,
//!   MoodAdvisor, DataExportService.

mod account_service;
mod admin;
mod auth;
mod data_export_service;
pub mod error;
mod export;
mod gratitude;
mod gratitude_service;
mod mood;
mod mood_advisor;
pub mod ports;
mod sleep;
mod sleep_log_service;
mod streak;
mod trace_id;
pub mod user;

pub use self::account_service::{AccountService, INVALID_CREDENTIALS};
pub use self::admin::AdminSecret;
pub use self::auth::{CredentialsValidationError, LoginCredentials, NewAccount, PASSWORD_MIN};
pub use self::data_export_service::{DataExportService, EXPORT_DENIED};
pub use self::error::{Error, ErrorCode};
pub use self::export::DataExport;
pub use self::gratitude::{CONTENT_MAX, GratitudeContent, GratitudeNote, NewGratitudeNote};
pub use self::gratitude_service::GratitudeService;
pub use self::mood::{MoodAdvice, Polarity};
pub use self::mood_advisor::MoodAdvisor;
pub use self::sleep::{
    LogValidationError, MoodLabel, NewSleepEntry, SleepEntry, SleepHours, SleepQuality,
    parse_calendar_date,
};
pub use self::sleep_log_service::SleepLogService;
pub use self::streak::{StreakState, StreakTransition, StreakUpdate};
pub use self::trace_id::TraceId;
pub use self::user::{Email, UserId, UserMode, UserProfile, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use sleepease::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
