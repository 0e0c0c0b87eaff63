//! Gratitude journal notes.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{LogValidationError, UserId};

/// Maximum length of a gratitude note.
pub const CONTENT_MAX: usize = 2000;

/// Non-empty, trimmed note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeContent(String);

impl GratitudeContent {
    /// Validate note text.
    ///
    /// # Examples
    /// ```
    /// use sleepease::domain::GratitudeContent;
    ///
    /// assert!(GratitudeContent::new("  sunny walk ").is_ok());
    /// assert!(GratitudeContent::new("   ").is_err());
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, LogValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LogValidationError::EmptyContent);
        }
        if trimmed.chars().count() > CONTENT_MAX {
            return Err(LogValidationError::ContentTooLong { max: CONTENT_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for GratitudeContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated note awaiting persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGratitudeNote {
    pub user_id: UserId,
    pub content: GratitudeContent,
    pub date: NaiveDate,
}

/// Persisted, immutable gratitude note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GratitudeNote {
    pub id: Uuid,
    pub user_id: UserId,
    pub content: GratitudeContent,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl GratitudeNote {
    /// Stamp a new note with its identifier and creation time.
    #[must_use]
    pub fn from_new(note: NewGratitudeNote, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: note.user_id,
            content: note.content,
            date: note.date,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn content_is_trimmed() {
        let content = GratitudeContent::new("\n a warm cup of tea \t").expect("content");
        assert_eq!(content.as_ref(), "a warm cup of tea");
    }

    #[rstest]
    #[case("".to_owned(), LogValidationError::EmptyContent)]
    #[case(" \n ".to_owned(), LogValidationError::EmptyContent)]
    #[case("g".repeat(CONTENT_MAX + 1), LogValidationError::ContentTooLong { max: CONTENT_MAX })]
    fn content_rejects_invalid_input(#[case] raw: String, #[case] expected: LogValidationError) {
        assert_eq!(GratitudeContent::new(raw), Err(expected));
    }

    #[rstest]
    fn content_accepts_maximum_length() {
        assert!(GratitudeContent::new("g".repeat(CONTENT_MAX)).is_ok());
    }
}
