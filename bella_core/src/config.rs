//! Configuration for the landing page.
//!
//! The browser build embeds `landing/bella.toml`; the prerender CLI loads a
//! file given with `--config`. Every field has a default, so an empty file
//! (or no file at all) yields the stock page.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Longest delay a browser `setTimeout` accepts, in milliseconds.
pub const MAX_CONFIRMATION_MS: u64 = i32::MAX as u64;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// `[page]` table
    pub page: PageConfig,
    /// `[subscribe]` table
    pub subscribe: SubscribeConfig,
}

/// Document metadata used by the prerendered `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `<title>` text
    pub title: String,
    /// `<html lang>` value
    pub lang: String,
    /// `<meta name="description">` content
    pub description: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Bella — Where Style Meets Soul".to_owned(),
            lang: "en".to_owned(),
            description: "Discover timeless fashion crafted for the bold and beautiful.".to_owned(),
        }
    }
}

/// Email capture timings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubscribeConfig {
    /// How long the confirmation stays up after a successful submit.
    pub confirmation_ms: u64,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        Self { confirmation_ms: 3000 }
    }
}

impl SubscribeConfig {
    /// [`Self::confirmation_ms`] as a `Duration`.
    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

impl LandingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific path.
    /// Returns the default config if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject values that would break the page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subscribe.confirmation_ms == 0 {
            return Err(ConfigError::ZeroConfirmationDelay);
        }
        if self.subscribe.confirmation_ms > MAX_CONFIRMATION_MS {
            return Err(ConfigError::ConfirmationDelayTooLong {
                value: self.subscribe.confirmation_ms,
                max: MAX_CONFIRMATION_MS,
            });
        }
        Ok(())
    }
}
