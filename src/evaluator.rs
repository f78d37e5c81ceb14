//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachStatus, RangeLookup};
use crate::sections::{
    breach_section, digit_section, length_section, lowercase_section, repetition_section,
    special_section, uppercase_section, SectionResult, BREACH_SUGGESTION,
};
use crate::types::{PasswordEvaluation, PasswordScore, PasswordStrength};

/// Evaluates password strength and returns a detailed evaluation.
///
/// Six rules run in order, each worth one point. The breach check runs last
/// and overrides the score-derived verdict on a match. A failed breach lookup
/// never errors: it counts as "not breached" and sets
/// [`PasswordEvaluation::breach_check_failed`].
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `lookup` - Breach range capability, usually a [`crate::HibpClient`]
pub fn evaluate_password_strength(
    password: &SecretString,
    lookup: &dyn RangeLookup,
) -> PasswordEvaluation {
    let mut suggestions = Vec::new();
    let mut passed: u8 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
        ("repetition", repetition_section),
    ];

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Section failed: {}", _section_name);
                suggestions.push(suggestion.to_string());
            }
            None => passed += 1,
        }
    }

    let score = PasswordScore::new(passed);

    let status = breach_section(password, lookup);
    if status == BreachStatus::Breached {
        suggestions.push(BREACH_SUGGESTION.to_string());
        return PasswordEvaluation {
            strength: PasswordStrength::Breached,
            score,
            suggestions,
            breach_check_failed: false,
        };
    }

    PasswordEvaluation {
        strength: PasswordStrength::from_score(score),
        score,
        suggestions,
        breach_check_failed: status == BreachStatus::Unknown,
    }
}

/// Async version that sends evaluation result via channel.
///
/// Waits a short debounce first, then runs the blocking evaluation on the
/// blocking pool, so a [`crate::HibpClient`] can be passed straight in.
/// Nothing is sent if `token` is cancelled before the result is ready.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    lookup: Arc<dyn RangeLookup + Send + Sync>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    use secrecy::ExposeSecret;
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(Duration::from_millis(300)) => {}
    }

    let owned = SecretString::new(password.expose_secret().to_owned().into());
    let task = tokio::task::spawn_blocking(move || evaluate_password_strength(&owned, &*lookup));

    let evaluation = tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("evaluation cancelled");
            return;
        }
        joined = task => match joined {
            Ok(evaluation) => evaluation,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Password evaluation task failed: {}", _e);
                return;
            }
        },
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::{hash_password, split_hash, BreachError};
    use std::cell::Cell;

    /// Fake range service: either knows the password, knows nothing, or is down.
    enum FakeRange {
        Knows(&'static str),
        Empty,
        Down,
    }

    impl RangeLookup for FakeRange {
        fn range(&self, _prefix: &str) -> Result<String, BreachError> {
            match self {
                FakeRange::Knows(pwd) => {
                    let hash = hash_password(pwd);
                    let (_, suffix) = split_hash(&hash);
                    Ok(format!("0018A45C4D1DEF81644B54AB7F969B88D65:1\n{}:99\n", suffix))
                }
                FakeRange::Empty => Ok(String::new()),
                FakeRange::Down => Err(BreachError::Status(503)),
            }
        }
    }

    struct CountingRange(Cell<usize>);

    impl RangeLookup for CountingRange {
        fn range(&self, _prefix: &str) -> Result<String, BreachError> {
            self.0.set(self.0.get() + 1);
            Ok(String::new())
        }
    }

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_repeated_lowercase() {
        let evaluation = evaluate_password_strength(&secret("aaaaaaaa"), &FakeRange::Empty);

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(
            evaluation.suggestions,
            vec![
                "try using UPPERCASE",
                "try using digits",
                "try using $pecial (haracters",
                "try nnot tto rreppeaatt chharraccterrs",
            ]
        );
        assert!(!evaluation.breach_check_failed);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password_strength(&secret(""), &FakeRange::Empty);

        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(
            evaluation.suggestions,
            vec![
                "try a longer password",
                "try using UPPERCASE",
                "TRY USING lowercase",
                "try using digits",
                "try using $pecial (haracters",
            ]
        );
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate_password_strength(&secret("Tr0ub4dor&3x"), &FakeRange::Empty);

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert_eq!(evaluation.score.value(), 6);
        assert!(evaluation.suggestions.is_empty());
    }

    #[test]
    fn test_evaluate_moderate_password() {
        // Missing special chars only
        let evaluation = evaluate_password_strength(&secret("MyPalm1234"), &FakeRange::Empty);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.score.value(), 5);
        assert_eq!(evaluation.suggestions, vec!["try using $pecial (haracters"]);

        // Short, no special chars
        let evaluation = evaluate_password_strength(&secret("Ab1cd"), &FakeRange::Empty);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.score.value(), 4);
    }

    #[test]
    fn test_evaluate_short_passwords_get_length_suggestion() {
        for pwd in ["a", "Ab1!", "Xy9#Xy9"] {
            let evaluation = evaluate_password_strength(&secret(pwd), &FakeRange::Empty);
            assert!(
                evaluation.suggestions.contains(&"try a longer password".to_string()),
                "missing length suggestion for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_no_digit_loses_point() {
        let with_digit = evaluate_password_strength(&secret("Abcdefg!1"), &FakeRange::Empty);
        let without_digit = evaluate_password_strength(&secret("Abcdefg!x"), &FakeRange::Empty);

        assert_eq!(with_digit.score.value(), without_digit.score.value() + 1);
        assert!(without_digit.suggestions.contains(&"try using digits".to_string()));
    }

    #[test]
    fn test_evaluate_breached_overrides_score() {
        let evaluation =
            evaluate_password_strength(&secret("Tr0ub4dor&3x"), &FakeRange::Knows("Tr0ub4dor&3x"));

        assert_eq!(evaluation.strength(), PasswordStrength::Breached);
        assert!(evaluation.is_breached());
        assert_eq!(evaluation.score.value(), 6);
        assert_eq!(evaluation.suggestions, vec!["choose another password"]);
    }

    #[test]
    fn test_evaluate_breached_appends_after_rule_suggestions() {
        let evaluation = evaluate_password_strength(&secret("password"), &FakeRange::Knows("password"));

        assert_eq!(evaluation.strength(), PasswordStrength::Breached);
        assert_eq!(evaluation.suggestions.last().unwrap(), "choose another password");
        assert_eq!(evaluation.suggestions.len(), 5);
    }

    #[test]
    fn test_evaluate_other_suffix_is_not_breached() {
        let evaluation = evaluate_password_strength(&secret("Tr0ub4dor&3x"), &FakeRange::Knows("password"));
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluate_lookup_failure_degrades_to_not_breached() {
        let evaluation = evaluate_password_strength(&secret("Tr0ub4dor&3x"), &FakeRange::Down);

        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.breach_check_failed);
        assert!(evaluation.suggestions.is_empty());
    }

    #[test]
    fn test_evaluate_single_lookup_per_call() {
        let lookup = CountingRange(Cell::new(0));
        evaluate_password_strength(&secret("whatever"), &lookup);
        assert_eq!(lookup.0.get(), 1);
    }
}
