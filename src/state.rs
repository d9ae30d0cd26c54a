//! Explicit UI state for the meter shell.
//!
//! The widget tree holds no state of its own: event handlers take the
//! current [`UiState`], call one update method and render the returned
//! state. The strength report is recomputed on every password change, so
//! nothing stale carries over between events.

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate;
use crate::generator;
use crate::report::StrengthReport;

/// Snapshot of everything the shell binds to: the password field value, the
/// derived report and the two display flags.
#[derive(Clone)]
pub struct UiState {
    password: SecretString,
    report: StrengthReport,
    password_visible: bool,
    dark_mode: bool,
}

impl UiState {
    /// Fresh state: empty password (already evaluated), masked input field,
    /// dark theme.
    pub fn new() -> Self {
        let password = SecretString::new(String::new().into());
        let report = evaluate(&password);
        Self {
            password,
            report,
            password_visible: false,
            dark_mode: true,
        }
    }

    /// Replaces the field value and re-evaluates.
    ///
    /// The value is stored verbatim; the evaluator trims it on its own, so
    /// the clipboard still sees exactly what was typed.
    pub fn with_password(self, value: impl Into<String>) -> Self {
        let password = SecretString::new(value.into().into());
        let report = evaluate(&password);
        Self {
            password,
            report,
            ..self
        }
    }

    /// Replaces the field value with a freshly generated password and
    /// re-evaluates.
    pub fn generate_password(self) -> Self {
        self.with_password(generator::generate())
    }

    /// Shows or masks the password field. No evaluator interaction.
    pub fn toggle_visibility(self) -> Self {
        Self {
            password_visible: !self.password_visible,
            ..self
        }
    }

    /// Switches between dark and light theme. No evaluator interaction.
    pub fn toggle_theme(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// The exact current field text for the clipboard, or `None` when the
    /// field is empty (copying an empty password is a no-op).
    pub fn clipboard_text(&self) -> Option<String> {
        let value = self.password.expose_secret();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// The report derived from the current field value.
    pub fn report(&self) -> &StrengthReport {
        &self.report
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Verdict;

    #[test]
    fn test_new_state_defaults() {
        let state = UiState::new();

        assert!(!state.password_visible());
        assert!(state.dark_mode());
        assert_eq!(state.report().verdict, Verdict::Weak);
        assert_eq!(state.clipboard_text(), None);
    }

    #[test]
    fn test_with_password_reevaluates() {
        let state = UiState::new().with_password("Abcdefghij1!");
        assert_eq!(state.report().score, 3);

        let state = state.with_password("");
        assert_eq!(state.report().score, 1);
    }

    #[test]
    fn test_clipboard_text_is_verbatim() {
        // Evaluation trims, the clipboard does not
        let state = UiState::new().with_password("  hunter2  ");
        assert_eq!(state.clipboard_text().as_deref(), Some("  hunter2  "));
    }

    #[test]
    fn test_toggle_visibility_flips_only_that_flag() {
        let state = UiState::new().with_password("abc");
        let score = state.report().score;

        let toggled = state.toggle_visibility();
        assert!(toggled.password_visible());
        assert!(toggled.dark_mode());
        assert_eq!(toggled.report().score, score);

        assert!(!toggled.toggle_visibility().password_visible());
    }

    #[test]
    fn test_toggle_theme_flips_only_that_flag() {
        let state = UiState::new();
        let toggled = state.toggle_theme();

        assert!(!toggled.dark_mode());
        assert!(!toggled.password_visible());
        assert!(toggled.toggle_theme().dark_mode());
    }

    #[test]
    fn test_generate_password_fills_field_and_reevaluates() {
        let state = UiState::new().generate_password();

        let text = state.clipboard_text().expect("field should be filled");
        assert_eq!(text.chars().count(), generator::GENERATED_LENGTH);
        // 14 generated characters always satisfy the length check
        assert!(state.report().length.passed);
    }
}
