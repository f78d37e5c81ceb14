//! Breach lookup module
//!
//! Checks passwords against a k-anonymity range API: only the first five
//! hex characters of the SHA-1 hash leave the process, the remote service
//! answers with every known suffix for that prefix.

use sha1::{Digest, Sha1};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

/// Default range endpoint (Have I Been Pwned).
pub const DEFAULT_BREACH_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default request timeout in milliseconds.
pub const DEFAULT_BREACH_TIMEOUT_MS: u64 = 5_000;

const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Breach lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Breach lookup returned HTTP status {0}")]
    Status(u16),
    #[error("Invalid breach lookup timeout: {0}")]
    InvalidTimeout(String),
    #[error("Invalid hash prefix: {0}")]
    InvalidPrefix(String),
}

/// Outcome of a single breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Breached,
    NotBreached,
    /// The lookup failed; callers fold this into "not breached".
    Unknown,
}

/// The breach-range capability: given a 5 character hash prefix, returns the
/// raw newline-delimited list of suffixes known for it.
pub trait RangeLookup {
    fn range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// Returns the range endpoint base URL.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_API_URL`
/// 2. [`DEFAULT_BREACH_API_URL`]
pub fn get_breach_api_url() -> String {
    std::env::var("PWD_BREACH_API_URL").unwrap_or_else(|_| DEFAULT_BREACH_API_URL.to_string())
}

/// Returns the lookup timeout.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_TIMEOUT_MS`
/// 2. [`DEFAULT_BREACH_TIMEOUT_MS`]
///
/// # Errors
///
/// Returns [`BreachError::InvalidTimeout`] if the variable is set but is not a
/// positive integer.
pub fn get_breach_timeout() -> Result<Duration, BreachError> {
    match std::env::var("PWD_BREACH_TIMEOUT_MS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
            _ => Err(BreachError::InvalidTimeout(raw)),
        },
        Err(_) => Ok(Duration::from_millis(DEFAULT_BREACH_TIMEOUT_MS)),
    }
}

/// SHA-1 hash a password and return the uppercase hex string.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Split a SHA-1 hex hash into prefix (5 chars) and suffix (35 chars).
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN)
}

/// Returns `true` if any line of a range response starts with `suffix`.
///
/// Lines look like `SUFFIX:COUNT`; the count is ignored and the comparison is
/// case-insensitive.
pub fn suffix_in_range(body: &str, suffix: &str) -> bool {
    body.lines()
        .filter_map(|line| line.split(':').next())
        .any(|candidate| candidate.trim().eq_ignore_ascii_case(suffix))
}

/// Checks a password against the breach corpus.
///
/// Never fails: a lookup error yields [`BreachStatus::Unknown`].
pub fn check_breach(password: &str, lookup: &dyn RangeLookup) -> BreachStatus {
    let hash = hash_password(password);
    let (prefix, suffix) = split_hash(&hash);

    match lookup.range(prefix) {
        Ok(body) if suffix_in_range(&body, suffix) => BreachStatus::Breached,
        Ok(_) => BreachStatus::NotBreached,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Breach lookup failed, treating password as not breached: {}", _e);
            BreachStatus::Unknown
        }
    }
}

/// Blocking HTTP client for a k-anonymity range endpoint.
///
/// The underlying `reqwest` blocking client is built on the first lookup,
/// on the thread that performs it. Constructing a `HibpClient` is therefore
/// safe inside an async runtime; lookups themselves block and must run off
/// the async workers (as `evaluate_password_strength_tx` does).
#[derive(Debug, Clone)]
pub struct HibpClient {
    client: OnceLock<reqwest::blocking::Client>,
    base_url: String,
    timeout: Duration,
}

impl HibpClient {
    /// Creates a client for `base_url` (without the trailing prefix segment).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BreachError> {
        if timeout.is_zero() {
            return Err(BreachError::InvalidTimeout(format!("{:?}", timeout)));
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();

        #[cfg(feature = "tracing")]
        tracing::info!("Breach lookup client configured: {} (timeout {:?})", base_url, timeout);

        Ok(Self {
            client: OnceLock::new(),
            base_url,
            timeout,
        })
    }

    /// Creates a client configured from `PWD_BREACH_API_URL` and
    /// `PWD_BREACH_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, BreachError> {
        Self::new(get_breach_api_url(), get_breach_timeout()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn http(&self) -> Result<&reqwest::blocking::Client, BreachError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("pwd-strength/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(self.client.get_or_init(|| built))
    }
}

impl RangeLookup for HibpClient {
    fn range(&self, prefix: &str) -> Result<String, BreachError> {
        if prefix.len() != PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BreachError::InvalidPrefix(prefix.to_string()));
        }

        let url = format!("{}/{}", self.base_url, prefix);
        let response = self.http()?.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        Ok(response.text()?)
    }
}
