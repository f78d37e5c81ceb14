//! Plain-text rendering of an evaluation, for display in a text area or
//! terminal.

use secrecy::{ExposeSecret, SecretString};

use crate::breach::RangeLookup;
use crate::evaluator::evaluate_password_strength;
use crate::types::PasswordEvaluation;

pub const EMPTY_PASSWORD_MESSAGE: &str = "There's no password to check!";

/// Formats an evaluation as user-facing text.
pub fn format_evaluation(evaluation: &PasswordEvaluation) -> String {
    let mut out = if evaluation.is_breached() {
        format!(
            "The password has been {}, change your password immediately.\n",
            evaluation.strength
        )
    } else {
        let mut text = format!("The password is {}\n", evaluation.strength);
        if evaluation.suggestions.is_empty() {
            text.push_str("No suggestions to improve your password.\n");
        } else {
            text.push_str("Suggestions:\n");
            for suggestion in &evaluation.suggestions {
                text.push_str("- ");
                text.push_str(suggestion);
                text.push('\n');
            }
        }
        text
    };

    if evaluation.breach_check_failed {
        out.push_str("Warning: the breach check could not be completed.\n");
    }
    out
}

/// Evaluates `password` and renders the result.
///
/// An empty password is not evaluated and no lookup is made.
pub fn render_report(password: &SecretString, lookup: &dyn RangeLookup) -> String {
    if password.expose_secret().is_empty() {
        return EMPTY_PASSWORD_MESSAGE.to_string();
    }
    format_evaluation(&evaluate_password_strength(password, lookup))
}
