//! User identity and profile data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StreakState;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
    EmailTooLong { max: usize },
    EmptyUsername,
    UsernameTooLong { max: usize },
    ModeTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like name@domain"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::ModeTooLong { max } => write!(f, "mode must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier assigned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Maximum email length accepted (RFC 5321 path limit).
pub const EMAIL_MAX: usize = 254;

/// Normalised (trimmed, lower-cased) email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and normalise an email address.
    ///
    /// # Examples
    /// ```
    /// use sleepease::domain::Email;
    ///
    /// let email = Email::new("  Ada@Example.COM ").unwrap();
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        let mut parts = trimmed.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(UserValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 64;

/// Display name chosen at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`]; surrounding whitespace is
    /// trimmed.
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Default mode label applied when registration omits one.
pub const DEFAULT_MODE: &str = "General";
/// Maximum allowed length for a mode label.
pub const MODE_MAX: usize = 32;

/// Free-form label describing how the user uses the app (e.g. "Student").
///
/// Labels are deliberately not enumerated; only their length is bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserMode(String);

impl UserMode {
    /// Build a mode from optional input, defaulting blank values to
    /// [`DEFAULT_MODE`].
    ///
    /// # Examples
    /// ```
    /// use sleepease::domain::UserMode;
    ///
    /// assert_eq!(UserMode::from_optional(None).unwrap().as_ref(), "General");
    /// assert_eq!(UserMode::from_optional(Some(" Shift work ")).unwrap().as_ref(), "Shift work");
    /// ```
    pub fn from_optional(mode: Option<&str>) -> Result<Self, UserValidationError> {
        match mode.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(label) if label.chars().count() > MODE_MAX => {
                Err(UserValidationError::ModeTooLong { max: MODE_MAX })
            }
            Some(label) => Ok(Self(label.to_owned())),
        }
    }
}

impl Default for UserMode {
    fn default() -> Self {
        Self(DEFAULT_MODE.to_owned())
    }
}

impl AsRef<str> for UserMode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<UserMode> for String {
    fn from(value: UserMode) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserMode {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_optional(Some(value.as_str()))
    }
}

/// Application user record.
///
/// ## Invariants
/// - `streak` is only mutated by the streak rule applied on sleep-log writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Identifier shared with the identity provider account.
    pub id: UserId,
    /// Normalised email address.
    pub email: Email,
    /// Display name.
    pub username: Username,
    /// Free-form usage mode.
    pub mode: UserMode,
    /// Current streak counter and last recorded sleep date.
    pub streak: StreakState,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Build the profile stored right after registration, with an empty
    /// streak.
    #[must_use]
    pub fn registered(
        id: UserId,
        email: Email,
        username: Username,
        mode: UserMode,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            username,
            mode,
            streak: StreakState::default(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests;
