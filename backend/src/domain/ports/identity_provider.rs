//! Port abstraction for the identity provider holding login accounts.
use async_trait::async_trait;

use crate::domain::{LoginCredentials, NewAccount, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// Provider connection could not be established.
        Connection { message: String } => "identity provider connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "identity provider query failed: {message}",
        /// An account already exists for the email address.
        EmailTaken { email: String } => "an account already exists for {email}",
        /// Password hashing or verification could not run.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Creates accounts and verifies login credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return the identifier assigned to it.
    async fn create_account(&self, account: &NewAccount) -> Result<UserId, IdentityProviderError>;

    /// Return the account identifier when the credentials match, `None`
    /// for an unknown email or a wrong password.
    async fn verify_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<UserId>, IdentityProviderError>;
}
