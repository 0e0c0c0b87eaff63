//! Authentication primitives: login credentials and registration input.
//!
//! Handlers build these through validating constructors before any port is
//! called; passwords are held in [`Zeroizing`] buffers.

use std::fmt;

use zeroize::Zeroizing;

use super::{Email, UserMode, UserValidationError, Username};

/// Minimum password length accepted on registration.
pub const PASSWORD_MIN: usize = 8;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Password was blank.
    EmptyPassword,
    /// Registration password shorter than [`PASSWORD_MIN`].
    PasswordTooShort { min: usize },
    /// A user field failed validation.
    User(UserValidationError),
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::User(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::User(value)
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is normalised by [`Email::new`].
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use sleepease::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Ada@Example.com", "hunter22").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password(), "hunter22");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for account lookups.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    credentials: LoginCredentials,
    username: Username,
    mode: UserMode,
}

impl NewAccount {
    /// Validate registration inputs; `mode` defaults to `"General"`.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        username: &str,
        mode: Option<&str>,
    ) -> Result<Self, CredentialsValidationError> {
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(CredentialsValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self {
            credentials,
            username: Username::new(username)?,
            mode: UserMode::from_optional(mode)?,
        })
    }

    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    pub fn email(&self) -> &Email {
        self.credentials.email()
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn mode(&self) -> &UserMode {
        &self.mode
    }
}
