//! Account domain services.
//!
//! [`AccountService`] implements registration, login, and the current-user
//! profile query on top of the identity provider and user repository ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AccountCommand, IdentityProvider, IdentityProviderError, UserPersistenceError,
    UserProfileQuery, UserRepository,
};
use crate::domain::{Error, LoginCredentials, NewAccount, UserId, UserProfile};

/// Message returned for every login failure.
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Account service implementing the account driving ports.
#[derive(Clone)]
pub struct AccountService<I: ?Sized, U: ?Sized> {
    identity: Arc<I>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<I: ?Sized, U: ?Sized> AccountService<I, U> {
    /// Create a new service with the given collaborators.
    pub fn new(identity: Arc<I>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            identity,
            users,
            clock,
        }
    }
}

impl<I, U> AccountService<I, U>
where
    I: IdentityProvider + ?Sized,
    U: UserRepository + ?Sized,
{
    fn map_identity_error(err: IdentityProviderError) -> Error {
        match err {
            IdentityProviderError::Hashing { message } => {
                error!(%message, "password hashing failed");
                Error::internal(format!("password hashing failed: {message}"))
            }
            other => Error::operation_failed(other.to_string()),
        }
    }

    fn map_user_error(err: UserPersistenceError) -> Error {
        Error::operation_failed(err.to_string())
    }
}

#[async_trait]
impl<I, U> AccountCommand for AccountService<I, U>
where
    I: IdentityProvider + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn register(&self, account: &NewAccount) -> Result<UserId, Error> {
        let user_id = self
            .identity
            .create_account(account)
            .await
            .map_err(Self::map_identity_error)?;

        // The account is not rolled back if this insert fails; login still
        // works and the profile is simply absent.
        let profile = UserProfile::registered(
            user_id.clone(),
            account.email().clone(),
            account.username().clone(),
            account.mode().clone(),
            self.clock.utc(),
        );
        self.users
            .insert(&profile)
            .await
            .map_err(Self::map_user_error)?;

        info!(user_id = %user_id, mode = profile.mode.as_ref(), "registered account");
        Ok(user_id)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        match self.identity.verify_credentials(credentials).await {
            Ok(Some(user_id)) => {
                info!(user_id = %user_id, "login succeeded");
                Ok(user_id)
            }
            Ok(None) => {
                warn!("login rejected: unknown email or wrong password");
                Err(Error::invalid_request(INVALID_CREDENTIALS))
            }
            Err(err) => {
                warn!(error = %err, "login rejected: identity provider failure");
                Err(Error::invalid_request(INVALID_CREDENTIALS))
            }
        }
    }
}

#[async_trait]
impl<I, U> UserProfileQuery for AccountService<I, U>
where
    I: IdentityProvider + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<UserProfile, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::unauthorized("user profile not found"))
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
