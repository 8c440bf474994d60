//! # bella-core
//!
//! Framework-free domain logic behind the Bella landing page.
//!
//! The page itself is a handful of static sections plus one interactive
//! email capture form. Everything that has behavior lives here so it can be
//! tested natively, without a browser or a reactive runtime:
//!
//! - [`cards`] - the fixed collection cards shown in the feature grid
//! - [`email`] - the (deliberately naive) email plausibility check
//! - [`subscription`] - the form state machine and its reset tickets
//! - [`config`] - TOML configuration for page metadata and timings
//! - [`error`] - error types
//!
//! ## Quick Start
//!
//! ```rust
//! use bella_core::{SubscriptionForm, FormPhase};
//!
//! let mut form = SubscriptionForm::new();
//! form.set_input("hello@example.com");
//!
//! let ticket = form.submit().expect("plausible email");
//! assert_eq!(form.phase(), FormPhase::Submitted);
//! assert_eq!(form.email_input(), "");
//!
//! // The view layer fires this after the confirmation delay.
//! assert!(form.expire(ticket));
//! assert_eq!(form.phase(), FormPhase::Idle);
//! ```

#![warn(missing_docs)]

pub mod cards;
pub mod config;
pub mod email;
pub mod error;
pub mod subscription;

pub use cards::{FEATURE_CARDS, FeatureCard};
pub use config::{LandingConfig, MAX_CONFIRMATION_MS, PageConfig, SubscribeConfig};
pub use email::{is_plausible_email, validate_email};
pub use error::{ConfigError, SubscribeError};
pub use subscription::{CONFIRMATION_MESSAGE, FormPhase, ResetTicket, SubscriptionForm};

/// Brand name used across the page.
pub const BRAND: &str = "Bella";
