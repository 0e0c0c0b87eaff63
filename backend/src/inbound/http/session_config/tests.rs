//! Unit tests for session configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temporary key file");
    std::fs::write(file.path(), vec![b'k'; len]).expect("write key bytes");
    file
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn valid_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path().display().to_string()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn release_error(vars: HashMap<&'static str, String>) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), BuildMode::Release) {
        Ok(_) => panic!("release settings should be rejected"),
        Err(error) => error,
    }
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(valid_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&valid_key);
    vars.remove(missing);

    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
#[case(SAMESITE_ENV, "sideways")]
fn release_rejects_malformed_values(
    valid_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&valid_key);
    vars.insert(name, value.to_owned());

    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_ephemeral_keys(valid_key: NamedTempFile) {
    let mut vars = release_vars(&valid_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::EphemeralNotAllowed
    ));
}

#[rstest]
fn release_rejects_missing_key_file(valid_key: NamedTempFile) {
    let mut vars = release_vars(&valid_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/sleepease/session_key".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::KeyRead { .. }
    ));
}

#[rstest]
fn release_rejects_short_key() {
    let short = key_file(32);
    let err = release_error(release_vars(&short));
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length: 32, .. }
    ));
}

#[rstest]
fn release_rejects_insecure_same_site_none(valid_key: NamedTempFile) {
    let mut vars = release_vars(&valid_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    assert!(matches!(
        release_error(vars),
        SessionConfigError::InsecureSameSiteNone
    ));
}

#[rstest]
fn release_valid_settings_succeed(valid_key: NamedTempFile) {
    let env = mock_env(release_vars(&valid_key));
    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("expected valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
    assert_eq!(settings.key_fingerprint().len(), 16);
}

#[rstest]
fn same_key_file_gives_same_fingerprint(valid_key: NamedTempFile) {
    let first = session_settings_from_env(&mock_env(release_vars(&valid_key)), BuildMode::Release)
        .expect("first load");
    let second = session_settings_from_env(&mock_env(release_vars(&valid_key)), BuildMode::Release)
        .expect("second load");
    assert_eq!(first.key_fingerprint(), second.key_fingerprint());
}

#[rstest]
fn debug_defaults_allow_ephemeral_key() {
    let settings = session_settings_from_env(&mock_env(HashMap::new()), BuildMode::Debug)
        .expect("debug defaults should succeed");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case("unexpected", SameSite::Lax)]
#[case("none", SameSite::None)]
#[case("STRICT", SameSite::Strict)]
fn debug_same_site_parsing(
    valid_key: NamedTempFile,
    #[case] raw: &str,
    #[case] expected: SameSite,
) {
    let mut vars = release_vars(&valid_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, raw.to_owned());

    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug tolerates session toggles");
    assert_eq!(settings.same_site, expected);
}

#[rstest]
#[case("1", Some(true))]
#[case("Yes", Some(true))]
#[case("n", Some(false))]
#[case("FALSE", Some(false))]
#[case("2", None)]
fn parses_boolean_toggles(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
