//! Sleep log entries and their validated fields.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::UserId;

/// Validation errors for sleep and gratitude log fields.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValidationError {
    InvalidDate { raw: String },
    HoursOutOfRange { value: f64 },
    QualityOutOfRange { value: i64 },
    MoodTooLong { max: usize },
    EmptyContent,
    ContentTooLong { max: usize },
}

impl fmt::Display for LogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { raw } => {
                write!(f, "date must be a calendar date formatted YYYY-MM-DD, got {raw:?}")
            }
            Self::HoursOutOfRange { value } => write!(
                f,
                "hours must be between {HOURS_MIN} and {HOURS_MAX}, got {value}"
            ),
            Self::QualityOutOfRange { value } => write!(
                f,
                "quality must be between {QUALITY_MIN} and {QUALITY_MAX}, got {value}"
            ),
            Self::MoodTooLong { max } => write!(f, "mood must be at most {max} characters"),
            Self::EmptyContent => write!(f, "content must not be empty"),
            Self::ContentTooLong { max } => {
                write!(f, "content must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for LogValidationError {}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// # Examples
/// ```
/// use sleepease::domain::parse_calendar_date;
///
/// assert!(parse_calendar_date("2024-02-29").is_ok());
/// assert!(parse_calendar_date("2023-02-29").is_err());
/// assert!(parse_calendar_date("2024-1-5").is_err());
/// ```
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, LogValidationError> {
    let invalid = || LogValidationError::InvalidDate {
        raw: raw.to_owned(),
    };
    // chrono accepts unpadded fields; the wire format is fixed-width.
    if raw.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

/// Lower bound for hours slept.
pub const HOURS_MIN: f64 = 0.0;
/// Upper bound for hours slept.
pub const HOURS_MAX: f64 = 24.0;

/// Hours slept in one night.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SleepHours(f64);

impl SleepHours {
    /// Validate a finite value in `0.0..=24.0`.
    pub fn new(value: f64) -> Result<Self, LogValidationError> {
        if !value.is_finite() || !(HOURS_MIN..=HOURS_MAX).contains(&value) {
            return Err(LogValidationError::HoursOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Raw value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Lowest accepted quality rating.
pub const QUALITY_MIN: i64 = 1;
/// Highest accepted quality rating.
pub const QUALITY_MAX: i64 = 10;

/// Self-reported sleep quality on a one-to-ten scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SleepQuality(u8);

impl SleepQuality {
    /// Validate a rating in `1..=10`.
    pub fn new(value: i64) -> Result<Self, LogValidationError> {
        if !(QUALITY_MIN..=QUALITY_MAX).contains(&value) {
            return Err(LogValidationError::QualityOutOfRange { value });
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| LogValidationError::QualityOutOfRange { value })
    }

    /// Raw value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Maximum length of a mood label.
pub const MOOD_MAX: usize = 64;

/// Free-form mood label attached to a sleep entry; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLabel(String);

impl MoodLabel {
    /// Trim and bound a mood label.
    pub fn new(value: impl AsRef<str>) -> Result<Self, LogValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.chars().count() > MOOD_MAX {
            return Err(LogValidationError::MoodTooLong { max: MOOD_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for MoodLabel {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated sleep entry awaiting persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSleepEntry {
    pub user_id: UserId,
    pub hours: SleepHours,
    pub quality: SleepQuality,
    pub mood: MoodLabel,
    pub date: NaiveDate,
}

/// Persisted, immutable sleep entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub hours: SleepHours,
    pub quality: SleepQuality,
    pub mood: MoodLabel,
    pub date: NaiveDate,
    /// Server-assigned insertion time.
    pub created_at: DateTime<Utc>,
}

impl SleepEntry {
    /// Stamp a new entry with its identifier and creation time.
    #[must_use]
    pub fn from_new(entry: NewSleepEntry, id: Uuid, created_at: DateTime<Utc>) -> Self {
        let NewSleepEntry {
            user_id,
            hours,
            quality,
            mood,
            date,
        } = entry;
        Self {
            id,
            user_id,
            hours,
            quality,
            mood,
            date,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-01")]
    #[case("2024-02-29")]
    #[case("1999-12-31")]
    fn accepts_calendar_dates(#[case] raw: &str) {
        assert!(parse_calendar_date(raw).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("2024-1-01")]
    #[case("2024-13-01")]
    #[case("2023-02-29")]
    #[case("01/02/2024")]
    #[case("2024-01-01T00:00:00Z")]
    fn rejects_malformed_dates(#[case] raw: &str) {
        assert_eq!(
            parse_calendar_date(raw),
            Err(LogValidationError::InvalidDate {
                raw: raw.to_owned()
            })
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(7.5)]
    #[case(24.0)]
    fn hours_accepts_range(#[case] value: f64) {
        assert_eq!(SleepHours::new(value).map(SleepHours::get), Ok(value));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(24.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn hours_rejects_out_of_range(#[case] value: f64) {
        assert!(SleepHours::new(value).is_err());
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    fn quality_accepts_bounds(#[case] value: i64) {
        assert!(SleepQuality::new(value).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(-3)]
    #[case(300)]
    fn quality_rejects_out_of_range(#[case] value: i64) {
        assert_eq!(
            SleepQuality::new(value),
            Err(LogValidationError::QualityOutOfRange { value })
        );
    }

    #[rstest]
    fn mood_is_trimmed_and_may_be_empty() {
        assert_eq!(MoodLabel::new("  rested ").expect("mood").as_ref(), "rested");
        assert_eq!(MoodLabel::new("").expect("mood").as_ref(), "");
    }

    #[rstest]
    fn mood_rejects_overlong_label() {
        assert_eq!(
            MoodLabel::new("z".repeat(MOOD_MAX + 1)),
            Err(LogValidationError::MoodTooLong { max: MOOD_MAX })
        );
    }
}
