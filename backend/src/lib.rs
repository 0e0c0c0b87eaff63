//! SleepEase backend library.
//!
//! The crate is laid out hexagonally: [`domain`] holds validated value types,
//! the streak rule, services, and ports; [`inbound`] adapts HTTP requests onto
//! the driving ports; [`outbound`] implements the driven ports against
//! PostgreSQL, an in-process store, and a lexicon sentiment analyzer.

pub mod app;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
