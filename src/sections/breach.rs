//! Breach section - checks the password against the breach corpus.

use crate::breach::{check_breach, BreachStatus, RangeLookup};
use secrecy::{ExposeSecret, SecretString};

pub const BREACH_SUGGESTION: &str = "choose another password";

/// Runs the breach check.
///
/// Unlike the other sections this one needs the lookup capability, so it
/// returns the raw [`BreachStatus`] and the evaluator decides what to do.
pub fn breach_section(password: &SecretString, lookup: &dyn RangeLookup) -> BreachStatus {
    check_breach(password.expose_secret(), lookup)
}
