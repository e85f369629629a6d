//! Password strength scoring.
//!
//! Five independent criteria, one point each. The percentage is the score out
//! of five and the tier buckets the percentage at 40 and 80.

use super::rules;
use serde::Serialize;
use std::fmt;

/// Number of criteria a password is scored against.
pub const CRITERIA_COUNT: u8 = 5;

/// Coarse strength bucket shown next to the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
}

impl Tier {
    /// Bucket a percentage: `< 40` weak, `< 80` medium, otherwise strong.
    pub fn from_percent(percent: u8) -> Self {
        if percent < 40 {
            Tier::Weak
        } else if percent < 80 {
            Tier::Medium
        } else {
            Tier::Strong
        }
    }

    /// Meter colour for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Weak => "#ef4444",
            Tier::Medium => "#f59e0b",
            Tier::Strong => "#22c55e",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Weak => write!(f, "Weak"),
            Tier::Medium => write!(f, "Medium"),
            Tier::Strong => write!(f, "Strong"),
        }
    }
}

/// Which of the five criteria a password meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl Criteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: rules::has_min_len(password),
            lowercase: rules::has_lowercase(password),
            uppercase: rules::has_uppercase(password),
            digit: rules::has_digit(password),
            special: rules::has_special(password),
        }
    }

    /// Criteria with their checklist labels, in display order.
    pub fn labeled(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.length),
            ("Lowercase letter", self.lowercase),
            ("Uppercase letter", self.uppercase),
            ("Number", self.digit),
            ("Special character", self.special),
        ]
    }

    pub fn count(&self) -> u8 {
        self.labeled().iter().filter(|(_, met)| *met).count() as u8
    }
}

/// Strength of one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub criteria: Criteria,
    /// Number of criteria met, 0 to 5.
    pub score: u8,
    /// Score as a percentage, 0 to 100 in steps of 20.
    pub percent: u8,
    pub tier: Tier,
}

impl PasswordStrength {
    /// The strength of an empty password: nothing met, 0%, weak.
    pub fn empty() -> Self {
        compute_strength("")
    }

    /// Label text shown under the meter.
    pub fn label(&self) -> String {
        format!("Strength: {}", self.tier)
    }
}

impl Default for PasswordStrength {
    fn default() -> Self {
        Self::empty()
    }
}

/// Score a password. Pure and idempotent.
pub fn compute_strength(password: &str) -> PasswordStrength {
    let criteria = Criteria::evaluate(password);
    let score = criteria.count();
    let percent = score * (100 / CRITERIA_COUNT);

    PasswordStrength {
        criteria,
        score,
        percent,
        tier: Tier::from_percent(percent),
    }
}
