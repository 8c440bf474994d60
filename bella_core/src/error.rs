//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Rejection of a subscription attempt.
///
/// The `Display` text is shown to the visitor verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// The text lacks an `@` or a `.`.
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

/// Failure to load a [`crate::LandingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// `subscribe.confirmation_ms` is zero, so the confirmation would never show.
    #[error("subscribe.confirmation_ms must be greater than zero")]
    ZeroConfirmationDelay,
    /// `subscribe.confirmation_ms` does not fit a browser timeout (`i32` milliseconds).
    #[error("subscribe.confirmation_ms must be at most {max}, got {value}")]
    ConfirmationDelayTooLong {
        /// Configured value
        value: u64,
        /// Largest accepted value
        max: u64,
    },
}
