//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in Unicode scalar values, not bytes or UTF-16 units.
/// A character outside the Basic Multilingual Plane (most emoji) counts
/// once here, where a UTF-16 based check would count it twice.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("try a longer password");
    }
    None
}
