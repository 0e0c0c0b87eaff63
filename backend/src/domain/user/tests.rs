//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
fn user_id_accepts_uuid() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.as_ref(), VALID_ID);
    assert_eq!(id.as_uuid().to_string(), VALID_ID);
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_deserialises_from_string() {
    let id: UserId = serde_json::from_value(json!(VALID_ID)).expect("deserialise id");
    assert_eq!(serde_json::to_value(&id).expect("serialise id"), json!(VALID_ID));
}

#[rstest]
#[case("ada@example.com", "ada@example.com")]
#[case("  Ada@Example.COM ", "ada@example.com")]
fn email_is_normalised(#[case] raw: &str, #[case] expected: &str) {
    let email = Email::new(raw).expect("valid email");
    assert_eq!(email.as_ref(), expected);
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("   ", UserValidationError::EmptyEmail)]
#[case("ada.example.com", UserValidationError::InvalidEmail)]
#[case("@example.com", UserValidationError::InvalidEmail)]
#[case("ada@", UserValidationError::InvalidEmail)]
#[case("a@b@c", UserValidationError::InvalidEmail)]
#[case("ada lovelace@example.com", UserValidationError::InvalidEmail)]
fn email_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
fn email_rejects_overlong_input() {
    let raw = format!("{}@example.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        Email::new(raw),
        Err(UserValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  Ada Lovelace ").expect("valid username");
    assert_eq!(username.as_ref(), "Ada Lovelace");
}

#[rstest]
#[case("".to_owned(), UserValidationError::EmptyUsername)]
#[case("   ".to_owned(), UserValidationError::EmptyUsername)]
#[case("x".repeat(USERNAME_MAX + 1), UserValidationError::UsernameTooLong { max: USERNAME_MAX })]
fn username_rejects_invalid_input(#[case] raw: String, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
#[case(None, "General")]
#[case(Some(""), "General")]
#[case(Some("   "), "General")]
#[case(Some("Student"), "Student")]
#[case(Some(" Night shift "), "Night shift")]
fn mode_defaults_when_blank(#[case] raw: Option<&str>, #[case] expected: &str) {
    let mode = UserMode::from_optional(raw).expect("valid mode");
    assert_eq!(mode.as_ref(), expected);
}

#[rstest]
fn mode_rejects_overlong_label() {
    let raw = "m".repeat(MODE_MAX + 1);
    assert_eq!(
        UserMode::from_optional(Some(raw.as_str())),
        Err(UserValidationError::ModeTooLong { max: MODE_MAX })
    );
}

#[rstest]
fn registered_profile_starts_with_empty_streak() {
    let profile = UserProfile::registered(
        UserId::new(VALID_ID).expect("valid id"),
        Email::new("ada@example.com").expect("valid email"),
        Username::new("Ada").expect("valid username"),
        UserMode::default(),
        chrono::Utc::now(),
    );
    assert_eq!(profile.streak, StreakState::default());
    assert_eq!(profile.streak.count, 0);
    assert!(profile.streak.last_sleep_date.is_none());
}

#[rstest]
fn validation_errors_render_readable_messages() {
    assert_eq!(
        UserValidationError::UsernameTooLong { max: 64 }.to_string(),
        "username must be at most 64 characters"
    );
    assert_eq!(
        UserValidationError::InvalidEmail.to_string(),
        "email must look like name@domain"
    );
}
