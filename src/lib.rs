//! Password strength evaluation library
//!
//! This library scores passwords against six fixed rules, checks them
//! against a breach corpus through a k-anonymity range lookup, and generates
//! passwords seeded from the date and keystroke timings.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: Range endpoint base URL
//!   (default: `https://api.pwnedpasswords.com/range`)
//! - `PWD_BREACH_TIMEOUT_MS`: Lookup timeout in milliseconds (default: `5000`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_strength::{evaluate_password_strength, generate_password, HibpClient};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let client = HibpClient::from_env().expect("Failed to build breach client");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password, &client);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//!
//! let generated = generate_password(&[132, 87, 210]).expect("Failed to generate");
//! println!("Generated: {}", generated.expose_secret());
//! ```

// Internal modules
mod breach;
mod evaluator;
mod generator;
mod report;
mod sections;
mod types;

#[cfg(test)]
mod test_util;

// Public API
pub use breach::{
    check_breach, get_breach_api_url, get_breach_timeout, hash_password, split_hash,
    suffix_in_range, BreachError, BreachStatus, HibpClient, RangeLookup,
    DEFAULT_BREACH_API_URL, DEFAULT_BREACH_TIMEOUT_MS,
};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    derive_seed, generate_password, CharacterPools, Clock, FixedClock, GenerateError,
    PasswordGenerator, SystemClock, DEFAULT_MAX_SHUFFLE_ATTEMPTS, MILLIS_PER_HOUR, PASSWORD_LENGTH,
};
pub use report::{format_evaluation, render_report, EMPTY_PASSWORD_MESSAGE};
pub use sections::SPECIAL_CHARACTERS;
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
