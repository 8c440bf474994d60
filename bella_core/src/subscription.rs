//! Email capture state machine.
//!
//! [`SubscriptionForm`] owns the three pieces of per-view state (input text,
//! submitted flag, error) and the transitions between them. It does not own a
//! timer: a successful [`SubscriptionForm::submit`] hands back a
//! [`ResetTicket`], and whoever schedules the confirmation timeout passes that
//! ticket to [`SubscriptionForm::expire`] when it fires.
//!
//! Only the ticket from the most recent success can clear the flag. A second
//! success inside the confirmation window therefore keeps the message up for
//! the full delay after the latest submit, even if the earlier timer was not
//! cancelled.

use tracing::debug;

use crate::email::validate_email;
use crate::error::SubscribeError;

/// Confirmation shown while [`SubscriptionForm::is_submitted`] is true.
pub const CONFIRMATION_MESSAGE: &str = "Thank you! You're all set.";

/// Token identifying the submission that scheduled a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// What the form is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing beyond the input.
    Idle,
    /// The last submit was rejected.
    Error,
    /// The last submit was accepted and the confirmation is still up.
    Submitted,
}

/// Per-view state of the email capture form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionForm {
    email_input: String,
    is_submitted: bool,
    error: Option<SubscribeError>,
    generation: u64,
}

impl SubscriptionForm {
    /// Empty input, nothing submitted, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the email field.
    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    /// Whether the confirmation message is showing.
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// Error from the last rejected submit, if it has not been cleared since.
    pub fn error(&self) -> Option<SubscribeError> {
        self.error
    }

    /// User-facing text for [`Self::error`].
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Collapses the two independent flags into one display state.
    ///
    /// A successful submit always clears the error, so an error that is
    /// present belongs to the latest submit and takes precedence.
    pub fn phase(&self) -> FormPhase {
        match (self.error, self.is_submitted) {
            (Some(_), _) => FormPhase::Error,
            (None, true) => FormPhase::Submitted,
            (None, false) => FormPhase::Idle,
        }
    }

    /// Replaces the input text (one call per keystroke).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.email_input = text.into();
    }

    /// Validates the current input.
    ///
    /// On rejection only the error changes; the input and the submitted flag
    /// are left as they were. On success the error and the input are cleared,
    /// the flag is raised, and the returned ticket must be passed to
    /// [`Self::expire`] once the confirmation delay has elapsed.
    pub fn submit(&mut self) -> Result<ResetTicket, SubscribeError> {
        if let Err(err) = validate_email(&self.email_input) {
            debug!(
                input_len = self.email_input.len(),
                "subscription rejected: missing '@' or '.'"
            );
            self.error = Some(err);
            return Err(err);
        }

        self.error = None;
        self.is_submitted = true;
        self.email_input.clear();
        self.generation += 1;
        debug!(generation = self.generation, "subscription accepted");
        Ok(ResetTicket(self.generation))
    }

    /// Hides the confirmation if `ticket` belongs to the latest success.
    ///
    /// Returns `false` for stale tickets, leaving the state untouched.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation {
            debug!(
                stale = ticket.0,
                current = self.generation,
                "ignoring stale confirmation reset"
            );
            return false;
        }
        self.is_submitted = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const INVALID: &str = "Please enter a valid email address.";

    fn form_with(text: &str) -> SubscriptionForm {
        let mut form = SubscriptionForm::new();
        form.set_input(text);
        form
    }

    #[test]
    fn starts_idle() {
        let form = SubscriptionForm::new();
        assert_eq!(form.email_input(), "");
        assert!(!form.is_submitted());
        assert_eq!(form.error_message(), None);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn keystrokes_replace_input() {
        let mut form = SubscriptionForm::new();
        form.set_input("h");
        form.set_input("he");
        assert_eq!(form.email_input(), "he");
    }

    #[test]
    fn rejects_text_without_at_sign() {
        let mut form = form_with("not-an-email");
        assert_eq!(form.submit(), Err(SubscribeError::InvalidEmailFormat));
        assert_eq!(form.error_message().as_deref(), Some(INVALID));
        assert_eq!(form.email_input(), "not-an-email");
        assert!(!form.is_submitted());
        assert_eq!(form.phase(), FormPhase::Error);
    }

    #[test]
    fn rejects_empty_input() {
        let mut form = SubscriptionForm::new();
        assert!(form.submit().is_err());
        assert_eq!(form.error_message().as_deref(), Some(INVALID));
        assert_eq!(form.email_input(), "");
    }

    #[test]
    fn accepts_and_clears_input() {
        let mut form = form_with("hello@example.com");
        assert!(form.submit().is_ok());
        assert_eq!(form.error_message(), None);
        assert_eq!(form.email_input(), "");
        assert!(form.is_submitted());
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut form = form_with("nope");
        let _ = form.submit();
        form.set_input("x@y.z");
        assert!(form.submit().is_ok());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn repeated_failure_keeps_same_message() {
        let mut form = form_with("nope");
        let _ = form.submit();
        form.set_input("still nope");
        let _ = form.submit();
        assert_eq!(form.error_message().as_deref(), Some(INVALID));
        assert_eq!(form.email_input(), "still nope");
    }

    #[test]
    fn expire_hides_confirmation() {
        let mut form = form_with("hello@example.com");
        let ticket = form.submit().expect("accepted");
        assert!(form.expire(ticket));
        assert!(!form.is_submitted());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn stale_ticket_does_not_hide_newer_confirmation() {
        let mut form = form_with("first@example.com");
        let first = form.submit().expect("accepted");
        form.set_input("second@example.com");
        let second = form.submit().expect("accepted");

        assert!(!form.expire(first));
        assert!(form.is_submitted());

        assert!(form.expire(second));
        assert!(!form.is_submitted());
    }

    #[test]
    fn failure_during_confirmation_leaves_flag_up() {
        let mut form = form_with("hello@example.com");
        let ticket = form.submit().expect("accepted");
        form.set_input("oops");
        assert!(form.submit().is_err());

        assert!(form.is_submitted());
        assert_eq!(form.phase(), FormPhase::Error);
        assert!(form.expire(ticket));
        assert!(!form.is_submitted());
    }

    proptest! {
        #[test]
        fn invalid_submit_only_touches_error(text in "[^@]*|[^.]*") {
            let mut form = form_with(&text);
            prop_assert!(form.submit().is_err());
            prop_assert_eq!(form.email_input(), text.as_str());
            prop_assert!(!form.is_submitted());
            let message = form.error_message();
            prop_assert_eq!(message.as_deref(), Some(INVALID));
        }

        #[test]
        fn valid_submit_resets_input(a in ".*", b in ".*") {
            let mut form = form_with(&format!("{a}@{b}."));
            prop_assert!(form.submit().is_ok());
            prop_assert_eq!(form.email_input(), "");
            prop_assert!(form.is_submitted());
            prop_assert_eq!(form.error(), None);
        }
    }
}
