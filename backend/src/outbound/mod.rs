//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed identity provider and repositories
//!   using Diesel
//! - **memory**: in-process store implementing the same ports
//! - **sentiment**: lexicon-based polarity scoring
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. The streak rule and validation stay in the domain.

pub mod memory;
pub(crate) mod password;
pub mod persistence;
pub mod sentiment;
