//! Password evaluation sections
//!
//! Each section checks one rule. Sections run in a fixed order and never
//! short-circuit each other.

mod breach;
mod length;
mod pattern;
mod variety;

pub use breach::{breach_section, BREACH_SUGGESTION};
pub use length::length_section;
pub use pattern::{has_adjacent_repeat, repetition_section};
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, SPECIAL_CHARACTERS,
};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Rule failed, suggestion for the user
/// - `None` - Rule passed
pub type SectionResult = Option<&'static str>;
