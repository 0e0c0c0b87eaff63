//! Driving port for registration and login use-cases.
//!
//! Inbound adapters call this port to create accounts and authenticate
//! credentials without importing the identity provider or user store.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, NewAccount, UserId};

/// Domain use-case port for account lifecycle.
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create the identity account and its user record.
    async fn register(&self, account: &NewAccount) -> Result<UserId, Error>;

    /// Validate credentials and return the authenticated user id.
    async fn login(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}
