//! Error types for guard-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for guard operations
pub type Result<T> = std::result::Result<T, GuardError>;

/// Fixed description of the password strength policy, returned on every policy failure
pub const INVALID_PASSWORD_MESSAGE: &str = "Password should be at least 8 characters long with at least one number, one uppercase letter, one lowercase letter and one special character";

/// Guard error types
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("{0}")]
    Base64Decode(String),

    #[error("Password encryption errors: {0}")]
    Encryption(String),

    /// Every decrypt-path failure collapses into this variant.
    #[error("Password decryption errors: unable to decrypt payload")]
    Decryption,

    #[error("{}", INVALID_PASSWORD_MESSAGE)]
    InvalidPassword,

    #[error("Missing mandatory configuration : {0:?}")]
    MissingConfiguration(Vec<String>),

    #[error("Error loading configuration: {0}")]
    ConfigLoad(String),

    #[error("Invalid server log Level '{0}'")]
    InvalidLogLevel(String),

    #[error("JSON unmarshal errors : {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GuardError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            GuardError::Base64Decode(_) => "BASE64_DECODE_ERROR",
            GuardError::Encryption(_) => "PASSWORD_ENCRYPTION_FAILED",
            GuardError::Decryption => "PASSWORD_DECRYPTION_FAILED",
            GuardError::InvalidPassword => "PASSWORD_INVALID",
            GuardError::MissingConfiguration(_) => "MISSING_MANDATORY_CONFIGURATION",
            GuardError::ConfigLoad(_) => "CONFIG_LOAD_ERROR",
            GuardError::InvalidLogLevel(_) => "SERVER_LOG_LEVEL_INVALID",
            GuardError::Serialization(_) => "JSON_UNMARSHAL_ERROR",
        }
    }

    /// Render as the uniform `{code, message}` record
    pub fn to_result(&self) -> ErrorResult {
        ErrorResult::from(self)
    }
}

/// Uniform error record handed to callers for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub code: String,
    pub message: String,
}

impl From<&GuardError> for ErrorResult {
    fn from(err: &GuardError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<GuardError> for ErrorResult {
    fn from(err: GuardError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(GuardError::Decryption.code(), "PASSWORD_DECRYPTION_FAILED");
        assert_eq!(GuardError::InvalidPassword.code(), "PASSWORD_INVALID");
        assert_eq!(
            GuardError::Base64Decode("bad".to_string()).code(),
            "BASE64_DECODE_ERROR"
        );
        assert_eq!(
            GuardError::Encryption("rng".to_string()).code(),
            "PASSWORD_ENCRYPTION_FAILED"
        );
    }

    #[test]
    fn test_invalid_password_message() {
        assert_eq!(
            GuardError::InvalidPassword.to_string(),
            INVALID_PASSWORD_MESSAGE
        );
    }

    #[test]
    fn test_missing_configuration_lists_fields() {
        let err = GuardError::MissingConfiguration(vec![
            "logLevel".to_string(),
            "passphraseEnv".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            r#"Missing mandatory configuration : ["logLevel", "passphraseEnv"]"#
        );
    }

    #[test]
    fn test_invalid_log_level_message() {
        let err = GuardError::InvalidLogLevel("TRACE".to_string());
        assert_eq!(err.to_string(), "Invalid server log Level 'TRACE'");
    }

    #[test]
    fn test_error_result_serializes_code_and_message() {
        let result = GuardError::Decryption.to_result();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["code"], "PASSWORD_DECRYPTION_FAILED");
        assert_eq!(
            json["message"],
            "Password decryption errors: unable to decrypt payload"
        );
    }
}
