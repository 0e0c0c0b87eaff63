//! Admin export secret loading.
//!
//! The secret is read from `ADMIN_SECRET_FILE` (default
//! `/var/run/secrets/admin_secret`). Release builds refuse to start without a
//! secret of at least [`ADMIN_SECRET_MIN_LEN`] bytes; debug builds run with the
//! export disabled when the file is missing.

use std::path::PathBuf;

use mockable::Env;
use tracing::{info, warn};
use zeroize::Zeroizing;

use super::session_config::BuildMode;
use crate::domain::AdminSecret;

const ADMIN_SECRET_DEFAULT_PATH: &str = "/var/run/secrets/admin_secret";
const ADMIN_SECRET_FILE_ENV: &str = "ADMIN_SECRET_FILE";

/// Minimum secret length accepted in release builds.
pub const ADMIN_SECRET_MIN_LEN: usize = 32;

/// Errors raised while loading the admin secret.
#[derive(thiserror::Error, Debug)]
pub enum AdminConfigError {
    /// Reading the secret file failed.
    #[error("failed to read admin secret at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret is shorter than [`ADMIN_SECRET_MIN_LEN`].
    #[error("admin secret at {path} too short: need >= {min_len} bytes, got {length}")]
    TooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Load the admin secret; `Ok(None)` means the export is disabled.
///
/// Trailing whitespace (such as the newline left by `echo`) is stripped before
/// hashing.
pub fn admin_secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<Option<AdminSecret>, AdminConfigError> {
    let path = PathBuf::from(
        env.string(ADMIN_SECRET_FILE_ENV)
            .unwrap_or_else(|| ADMIN_SECRET_DEFAULT_PATH.to_owned()),
    );

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => Zeroizing::new(bytes),
        Err(source) => {
            return mode.tolerate(None, AdminConfigError::Read { path: path.clone(), source }, || {
                warn!(path = %path.display(), "admin secret unavailable; export disabled");
            });
        }
    };
    let secret = bytes.trim_ascii_end();
    let length = secret.len();

    if length < ADMIN_SECRET_MIN_LEN {
        let error = AdminConfigError::TooShort {
            path: path.clone(),
            length,
            min_len: ADMIN_SECRET_MIN_LEN,
        };
        if length == 0 {
            return mode.tolerate(None, error, || {
                warn!(path = %path.display(), "admin secret empty; export disabled");
            });
        }
        mode.tolerate((), error, || {
            warn!(length, "admin secret shorter than recommended");
        })?;
    }

    let secret = AdminSecret::from_bytes(secret);
    info!(fingerprint = %secret.fingerprint(), "admin secret loaded");
    Ok(Some(secret))
}
