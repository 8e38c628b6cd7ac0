//! Front-end settings
//!
//! Non-sensitive configuration stored in a plain JSON file, overridable from
//! the environment. The passphrase itself is never stored here, only the name
//! of the environment variable that carries it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, info};

use crate::error::{GuardError, Result};

/// Environment variable overriding [`Settings::log_level`]
pub const ENV_LOG_LEVEL: &str = "GUARD_LOG_LEVEL";
/// Environment variable overriding [`Settings::passphrase_env`]
pub const ENV_PASSPHRASE_ENV: &str = "GUARD_PASSPHRASE_ENV";

const LEVEL_INFO: &str = "INFO";
const LEVEL_DEBUG: &str = "DEBUG";

/// Application settings. Both fields are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// `INFO` or `DEBUG`
    #[serde(default)]
    pub log_level: String,
    /// Name of the environment variable holding the passphrase
    #[serde(default)]
    pub passphrase_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LEVEL_INFO.to_string(),
            passphrase_env: "GUARD_PASSPHRASE".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, apply environment overrides and validate
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Like [`Settings::load`], resolving overrides through `lookup`
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            error!("Error loading configuration: {:?}", path);
            GuardError::ConfigLoad(format!("{}: {}", path.display(), e))
        })?;
        let mut settings: Settings = serde_json::from_str(&contents)?;
        settings.apply_overrides(lookup);
        settings.validate()?;

        info!("Configuration '{}' loaded successfully", path.display());
        Ok(settings)
    }

    /// Defaults with environment overrides, for runs without a settings file
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_overrides(|name| std::env::var(name).ok());
        settings.validate()?;
        Ok(settings)
    }

    /// Replace fields whose override variable is set
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            debug!("Overriding logLevel from {}", ENV_LOG_LEVEL);
            self.log_level = level;
        }
        if let Some(var) = lookup(ENV_PASSPHRASE_ENV) {
            debug!("Overriding passphraseEnv from {}", ENV_PASSPHRASE_ENV);
            self.passphrase_env = var;
        }
    }

    /// Report every blank mandatory field at once, then check the log level
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.log_level.trim().is_empty() {
            missing.push("logLevel".to_string());
        }
        if self.passphrase_env.trim().is_empty() {
            missing.push("passphraseEnv".to_string());
        }
        if !missing.is_empty() {
            return Err(GuardError::MissingConfiguration(missing));
        }

        self.tracing_level().map(|_| ())
    }

    /// Map the configured level onto a `tracing` level
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.trim().to_ascii_uppercase().as_str() {
            LEVEL_INFO => Ok(tracing::Level::INFO),
            LEVEL_DEBUG => Ok(tracing::Level::DEBUG),
            _ => Err(GuardError::InvalidLogLevel(self.log_level.clone())),
        }
    }
}
