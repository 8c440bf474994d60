//! Email plausibility check.
//!
//! Intentionally permissive: a string passes if it contains both `@` and `.`,
//! in any position. `"@."` passes, `"user@localhost"` does not. The browser's
//! own `type="email"` constraint runs before this in practice; this check is
//! what the form controller enforces.

use crate::error::SubscribeError;

/// True when `text` contains both `@` and `.`.
pub fn is_plausible_email(text: &str) -> bool {
    text.contains('@') && text.contains('.')
}

/// [`is_plausible_email`] as a `Result`.
pub fn validate_email(text: &str) -> Result<(), SubscribeError> {
    if is_plausible_email(text) {
        Ok(())
    } else {
        Err(SubscribeError::InvalidEmailFormat)
    }
}
