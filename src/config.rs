use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CronError, Result};
use crate::locale::Locale;

/// Environment variable overriding the configured locale
pub const LOCALE_ENV: &str = "A3S_CRON_LOCALE";

/// User-configurable settings for descriptions and messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronTextConfig {
    /// Output language (default: en)
    #[serde(default)]
    pub locale: Locale,
}

impl CronTextConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    /// Returns default config if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            CronError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CronError::Config(e.to_string()))
    }

    /// Apply `A3S_CRON_LOCALE` if set.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_locale_override(std::env::var(LOCALE_ENV).ok().as_deref())
    }

    fn with_locale_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.locale = value.parse()?;
            tracing::debug!(locale = %self.locale, "Locale overridden from environment");
        }
        Ok(self)
    }
}
