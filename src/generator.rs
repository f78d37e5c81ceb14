//! Password generator seeded from the date and keystroke timings.
//!
//! The seed is `day_of_month * 3_600_000` XOR every keystroke interval in
//! order. A fresh ChaCha20 generator is built for each call, so identical
//! inputs always produce the identical password.

use chrono::Datelike;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::sections::has_adjacent_repeat;

/// Length of every generated password.
pub const PASSWORD_LENGTH: usize = 12;

/// Upper bound on reshuffles before giving up.
pub const DEFAULT_MAX_SHUFFLE_ATTEMPTS: usize = 1_000;

/// Milliseconds in one hour; the day of month counts as that many hours.
pub const MILLIS_PER_HOUR: u64 = 3_600_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Character pool is empty: {0}")]
    EmptyPool(&'static str),
    #[error("No arrangement without adjacent repeats found after {attempts} shuffles")]
    ShuffleExhausted { attempts: usize },
}

/// Source of the current day of month.
pub trait Clock {
    /// Day of month, `1..=31`.
    fn day_of_month(&self) -> u32;
}

/// Reads the local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn day_of_month(&self) -> u32 {
        chrono::Local::now().day()
    }
}

/// Always reports the same day. Used for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn day_of_month(&self) -> u32 {
        self.0
    }
}

/// Derives the PRNG seed from a day of month and keystroke intervals.
pub fn derive_seed(day_of_month: u32, keystroke_timings: &[u64]) -> u64 {
    keystroke_timings
        .iter()
        .fold(u64::from(day_of_month) * MILLIS_PER_HOUR, |seed, timing| seed ^ timing)
}

/// The four character classes a generated password draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPools {
    pub upper: String,
    pub lower: String,
    pub digits: String,
    pub special: String,
}

impl Default for CharacterPools {
    fn default() -> Self {
        Self {
            upper: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
            lower: "abcdefghijklmnopqrstuvwxyz".to_string(),
            digits: "0123456789".to_string(),
            special: "!#$%^&*".to_string(),
        }
    }
}

impl CharacterPools {
    fn to_chars(&self) -> Result<[Vec<char>; 4], GenerateError> {
        let pools = [
            ("upper", &self.upper),
            ("lower", &self.lower),
            ("digits", &self.digits),
            ("special", &self.special),
        ];
        if let Some((name, _)) = pools.iter().find(|(_, pool)| pool.is_empty()) {
            return Err(GenerateError::EmptyPool(*name));
        }
        Ok(pools.map(|(_, pool)| pool.chars().collect()))
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[char]) -> char {
    pool[rng.gen_range(0..pool.len())]
}

/// Draws the remaining characters one at a time, uniformly.
fn shuffle<R: Rng>(rng: &mut R, mut remaining: Vec<char>) -> Vec<char> {
    let mut shuffled = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        shuffled.push(remaining.remove(index));
    }
    shuffled
}

/// Generates 12 character passwords with at least one upper, lower, digit
/// and special character and no adjacent repeats.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<C: Clock = SystemClock> {
    clock: C,
    pools: CharacterPools,
    max_shuffle_attempts: usize,
}

impl Default for PasswordGenerator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> PasswordGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            pools: CharacterPools::default(),
            max_shuffle_attempts: DEFAULT_MAX_SHUFFLE_ATTEMPTS,
        }
    }

    pub fn with_pools(mut self, pools: CharacterPools) -> Self {
        self.pools = pools;
        self
    }

    /// At least one shuffle always happens.
    pub fn with_max_shuffle_attempts(mut self, attempts: usize) -> Self {
        self.max_shuffle_attempts = attempts.max(1);
        self
    }

    /// Generates a password from today's date and the given timings.
    pub fn generate(&self, keystroke_timings: &[u64]) -> Result<SecretString, GenerateError> {
        let seed = derive_seed(self.clock.day_of_month(), keystroke_timings);
        self.generate_from_seed(seed)
    }

    /// Generates a password from an explicit seed.
    pub fn generate_from_seed(&self, seed: u64) -> Result<SecretString, GenerateError> {
        let [upper, lower, digits, special] = self.pools.to_chars()?;
        let all: Vec<char> = [&upper, &lower, &digits, &special]
            .into_iter()
            .flatten()
            .copied()
            .collect();

        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        // One of each class first, the rest from the union.
        let mut chars = Vec::with_capacity(PASSWORD_LENGTH);
        chars.push(pick(&mut rng, &upper));
        chars.push(pick(&mut rng, &lower));
        chars.push(pick(&mut rng, &digits));
        chars.push(pick(&mut rng, &special));
        for _ in chars.len()..PASSWORD_LENGTH {
            chars.push(pick(&mut rng, &all));
        }

        for _attempt in 1..=self.max_shuffle_attempts {
            chars = shuffle(&mut rng, chars);
            if !has_adjacent_repeat(&chars) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password generated after {} shuffle(s)", _attempt);
                return Ok(SecretString::new(chars.into_iter().collect::<String>().into()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::error!(
            "Password generation gave up after {} shuffles",
            self.max_shuffle_attempts
        );
        Err(GenerateError::ShuffleExhausted {
            attempts: self.max_shuffle_attempts,
        })
    }
}

/// Generates a password using the local date.
pub fn generate_password(keystroke_timings: &[u64]) -> Result<SecretString, GenerateError> {
    PasswordGenerator::new(SystemClock).generate(keystroke_timings)
}
