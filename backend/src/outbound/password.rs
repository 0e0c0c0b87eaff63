//! Argon2id password hashing shared by identity provider adapters.
//!
//! Hashing is CPU- and memory-heavy, so the async helpers move it onto the
//! blocking thread pool.

use argon2::Argon2;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::domain::ports::IdentityProviderError;

const SALT_LEN: usize = 16;

/// Hash `password` into a PHC string (`$argon2id$...`).
pub fn hash_password(password: &str) -> Result<String, IdentityProviderError> {
    let mut salt_bytes = [0_u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|err| IdentityProviderError::hashing(err.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| IdentityProviderError::hashing(err.to_string()))
}

/// Check `password` against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch and an error only when the stored hash
/// cannot be parsed or verification itself fails.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, IdentityProviderError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| IdentityProviderError::hashing(format!("stored hash unreadable: {err}")))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(IdentityProviderError::hashing(err.to_string())),
    }
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(
    password: Zeroizing<String>,
) -> Result<String, IdentityProviderError> {
    tokio::task::spawn_blocking(move || hash_password(password.as_str()))
        .await
        .map_err(|err| IdentityProviderError::hashing(format!("hashing task failed: {err}")))?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(
    password: Zeroizing<String>,
    stored_hash: String,
) -> Result<bool, IdentityProviderError> {
    tokio::task::spawn_blocking(move || verify_password(password.as_str(), &stored_hash))
        .await
        .map_err(|err| IdentityProviderError::hashing(format!("verification task failed: {err}")))?
}
