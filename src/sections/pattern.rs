//! Pattern section - detects adjacent repeated characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Returns `true` if two neighbouring characters are equal.
pub fn has_adjacent_repeat(chars: &[char]) -> bool {
    chars.windows(2).any(|w| w[0] == w[1])
}

/// Fails when any two adjacent characters are equal.
///
/// Strings shorter than 2 characters pass trivially.
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if has_adjacent_repeat(&chars) {
        return Some("try nnot tto rreppeaatt chharraccterrs");
    }
    None
}
