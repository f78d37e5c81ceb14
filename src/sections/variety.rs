//! Character variety sections - uppercase, lowercase, digits, special chars.
//!
//! Each class is its own rule so that every missing class gets its own
//! suggestion and its own score point.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters accepted by [`special_section`].
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/~`";

fn contains(password: &SecretString, predicate: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(predicate)
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !contains(password, char::is_uppercase) {
        return Some("try using UPPERCASE");
    }
    None
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !contains(password, char::is_lowercase) {
        return Some("TRY USING lowercase");
    }
    None
}

/// Only ASCII `0-9` count; fractions, superscripts and roman numerals do not.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !contains(password, |c| c.is_ascii_digit()) {
        return Some("try using digits");
    }
    None
}

/// Only characters from [`SPECIAL_CHARACTERS`] count; other punctuation or
/// whitespace does not.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !contains(password, |c| SPECIAL_CHARACTERS.contains(c)) {
        return Some("try using $pecial (haracters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        assert_eq!(uppercase_section(&secret("lowercase123!")), Some("try using UPPERCASE"));
        assert_eq!(uppercase_section(&secret("lowerCase")), None);
    }

    #[test]
    fn test_variety_missing_lowercase() {
        assert_eq!(lowercase_section(&secret("UPPERCASE123!")), Some("TRY USING lowercase"));
        assert_eq!(lowercase_section(&secret("UPPEr")), None);
    }

    #[test]
    fn test_variety_missing_digits() {
        assert_eq!(digit_section(&secret("NoNumbers!")), Some("try using digits"));
        assert_eq!(digit_section(&secret("One1")), None);
    }

    #[test]
    fn test_variety_numeric_symbols_are_not_digits() {
        for pwd in ["Abcdefg!½", "Abcdefg!Ⅷ", "Abcdefg!²"] {
            assert_eq!(digit_section(&secret(pwd)), Some("try using digits"), "{}", pwd);
        }
    }

    #[test]
    fn test_variety_special_set() {
        assert_eq!(special_section(&secret("NoSpecial123")), Some("try using $pecial (haracters"));
        for c in SPECIAL_CHARACTERS.chars() {
            assert_eq!(special_section(&secret(&format!("abc{}", c))), None, "{:?}", c);
        }
    }

    #[test]
    fn test_variety_special_ignores_other_symbols() {
        // Space, quote and apostrophe are not in the set
        assert!(special_section(&secret("a b\"c'd")).is_some());
    }

    #[test]
    fn test_variety_unicode_letters() {
        assert_eq!(uppercase_section(&secret("ÄÖÜ")), None);
        assert_eq!(lowercase_section(&secret("äöü")), None);
    }
}
