//! PostgreSQL-backed `IdentityProvider` storing Argon2id password hashes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{LoginCredentials, NewAccount, UserId};
use crate::outbound::password::{hash_password_blocking, verify_password_blocking};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{AccountCredentialsRow, NewAccountRow};
use super::pool::DbPool;
use super::schema::accounts;

/// Diesel-backed implementation of the identity provider port.
#[derive(Clone)]
pub struct DieselIdentityProvider {
    pool: DbPool,
}

impl DieselIdentityProvider {
    /// Create a new provider with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel(error: diesel::result::Error) -> IdentityProviderError {
    map_diesel_error(
        error,
        IdentityProviderError::query,
        IdentityProviderError::connection,
    )
}

#[async_trait]
impl IdentityProvider for DieselIdentityProvider {
    async fn create_account(&self, account: &NewAccount) -> Result<UserId, IdentityProviderError> {
        let password = Zeroizing::new(account.credentials().password().to_owned());
        let password_hash = hash_password_blocking(password).await?;
        let id = Uuid::new_v4();
        let row = NewAccountRow {
            id,
            email: account.email().as_ref(),
            password_hash: &password_hash,
            display_name: account.username().as_ref(),
        };

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdentityProviderError::connection))?;
        diesel::insert_into(accounts::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    IdentityProviderError::email_taken(account.email().as_ref())
                } else {
                    map_diesel(err)
                }
            })?;

        Ok(UserId::from_uuid(id))
    }

    async fn verify_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<UserId>, IdentityProviderError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, IdentityProviderError::connection))?;
        let row = accounts::table
            .filter(accounts::email.eq(credentials.email().as_ref()))
            .select(AccountCredentialsRow::as_select())
            .first::<AccountCredentialsRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;
        drop(conn);

        let Some(row) = row else {
            return Ok(None);
        };
        let password = Zeroizing::new(credentials.password().to_owned());
        let verified = verify_password_blocking(password, row.password_hash).await?;
        Ok(verified.then(|| UserId::from_uuid(row.id)))
    }
}
