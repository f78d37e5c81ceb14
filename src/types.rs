//! Evaluation result types.

use std::fmt;

/// Strength verdict for an evaluated password.
///
/// `Breached` always wins over the score-derived tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
    Breached,
}

impl PasswordStrength {
    /// Maps a rule score onto the non-breached tiers.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            s if s >= 6 => PasswordStrength::Strong,
            s if s >= 4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Moderate => "moderate",
            PasswordStrength::Strong => "strong",
            PasswordStrength::Breached => "breached",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of passed strength rules, `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 6;

    /// Creates a score, clamping to [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub strength: PasswordStrength,
    /// Always computed, also for breached passwords.
    pub score: PasswordScore,
    /// One entry per failed rule, in rule order.
    pub suggestions: Vec<String>,
    /// The breach lookup failed and was counted as "not breached".
    pub breach_check_failed: bool,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn is_breached(&self) -> bool {
        self.strength == PasswordStrength::Breached
    }
}
