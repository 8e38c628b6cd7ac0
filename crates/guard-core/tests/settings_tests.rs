use std::io::Write;

use guard_core::{GuardError, Settings};
use tempfile::NamedTempFile;

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_settings(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_valid_file() {
    let file = write_settings(r#"{"logLevel":"DEBUG","passphraseEnv":"VAULT_KEY"}"#);
    let settings = Settings::load_with(file.path(), no_env).unwrap();

    assert_eq!(settings.passphrase_env, "VAULT_KEY");
    assert_eq!(settings.tracing_level().unwrap(), tracing::Level::DEBUG);
}

#[test]
fn load_reports_missing_fields() {
    let file = write_settings(r#"{"logLevel":"INFO"}"#);
    let err = Settings::load_with(file.path(), no_env).unwrap_err();

    assert_eq!(err.code(), "MISSING_MANDATORY_CONFIGURATION");
    assert!(err.to_string().contains("passphraseEnv"));
}

#[test]
fn load_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load_with(&dir.path().join("absent.json"), no_env).unwrap_err();
    assert!(matches!(err, GuardError::ConfigLoad(_)));
}

#[test]
fn load_malformed_json() {
    let file = write_settings("{not json");
    let err = Settings::load_with(file.path(), no_env).unwrap_err();
    assert_eq!(err.code(), "JSON_UNMARSHAL_ERROR");
}

#[test]
fn overrides_fill_blank_fields_from_lookup() {
    let file = write_settings(r#"{"logLevel":"INFO"}"#);
    let settings = Settings::load_with(file.path(), |name| {
        (name == guard_core::settings::ENV_PASSPHRASE_ENV).then(|| "VAULT_KEY".to_string())
    })
    .unwrap();

    assert_eq!(settings.passphrase_env, "VAULT_KEY");
}
