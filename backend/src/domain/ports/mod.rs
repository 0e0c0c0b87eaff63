//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`IdentityProvider`], [`UserRepository`],
//! [`SleepLogRepository`], [`GratitudeLogRepository`],
//! [`SentimentAnalyzer`]) are implemented by outbound adapters and return
//! typed errors. Driving ports are implemented by domain services and called
//! by inbound adapters; they return the domain [`Error`](crate::domain::Error).

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod data_export_query;
mod gratitude_command;
mod gratitude_log_repository;
mod gratitude_query;
mod identity_provider;
mod mood_advice_query;
mod sentiment_analyzer;
mod sleep_log_command;
mod sleep_log_query;
mod sleep_log_repository;
mod user_profile_query;
mod user_repository;

pub use account_command::AccountCommand;
pub use data_export_query::DataExportQuery;
pub use gratitude_command::GratitudeCommand;
#[cfg(test)]
pub use gratitude_log_repository::MockGratitudeLogRepository;
pub use gratitude_log_repository::{GratitudeLogRepository, GratitudeLogRepositoryError};
pub use gratitude_query::GratitudeQuery;
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityProvider, IdentityProviderError};
pub use mood_advice_query::MoodAdviceQuery;
#[cfg(test)]
pub use sentiment_analyzer::MockSentimentAnalyzer;
pub use sentiment_analyzer::SentimentAnalyzer;
pub use sleep_log_command::SleepLogCommand;
pub use sleep_log_query::SleepLogQuery;
#[cfg(test)]
pub use sleep_log_repository::MockSleepLogRepository;
pub use sleep_log_repository::{RecordedSleepEntry, SleepLogRepository, SleepLogRepositoryError};
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
