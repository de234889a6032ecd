use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;
use crate::errors::{MeritError, MeritResult};

/// Reputation score clamped to [0, 1000].
///
/// The neutral default of 500 represents a subject with no evaluated
/// history. Scores are only ever replaced wholesale by a full
/// recomputation, never incremented in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReputationScore(u32);

impl ReputationScore {
    /// Lower bound of the range.
    pub const MIN: u32 = 0;
    /// Neutral default for subjects without ratings.
    pub const NEUTRAL: u32 = constants::NEUTRAL_SCORE;
    /// Upper bound of the range.
    pub const MAX: u32 = constants::SCORE_MAX;

    /// Create a new score, clamping to [0, 1000].
    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Round a raw float to the nearest integer score, clamping to the range.
    /// Rounding happens here and nowhere else in the pipeline.
    pub fn from_f64(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX as f64).round() as u32)
    }

    /// Validate a raw integer from an external source (API payload, row).
    pub fn try_from_raw(value: i64) -> MeritResult<Self> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(MeritError::ReputationOutOfRange { value })
        }
    }

    /// The neutral score (500).
    pub fn neutral() -> Self {
        Self(Self::NEUTRAL)
    }

    /// Get the raw integer value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ReputationScore {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for ReputationScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReputationScore {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ReputationScore> for u32 {
    fn from(score: ReputationScore) -> Self {
        score.0
    }
}

impl From<ReputationScore> for f64 {
    fn from(score: ReputationScore) -> Self {
        score.0 as f64
    }
}

/// Comment usefulness score clamped to [-1.0, 1.0].
///
/// 0.0 means the comment carries no signal, 1.0 means it is substantive.
/// The negative end is reserved for spam/abuse detection.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Usefulness(f64);

impl Usefulness {
    /// Reserved score for detected spam or abuse. No shipped analyzer
    /// emits it yet; future analyzers may.
    pub const SPAM: f64 = -1.0;

    /// Create a new usefulness score, clamping to [-1.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Usefulness {
    fn default() -> Self {
        Self(0.0)
    }
}

impl From<f64> for Usefulness {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_above_max() {
        assert_eq!(ReputationScore::new(1500).value(), 1000);
    }

    #[test]
    fn score_from_f64_rounds_then_clamps() {
        assert_eq!(ReputationScore::from_f64(503.5).value(), 504);
        assert_eq!(ReputationScore::from_f64(502.4).value(), 502);
        assert_eq!(ReputationScore::from_f64(-12.0).value(), 0);
        assert_eq!(ReputationScore::from_f64(1200.7).value(), 1000);
    }

    #[test]
    fn score_default_is_neutral() {
        assert_eq!(ReputationScore::default().value(), 500);
    }

    #[test]
    fn score_try_from_raw_rejects_out_of_range() {
        assert!(ReputationScore::try_from_raw(1000).is_ok());
        assert!(ReputationScore::try_from_raw(0).is_ok());
        assert!(ReputationScore::try_from_raw(-1).is_err());
        assert!(ReputationScore::try_from_raw(1001).is_err());
    }

    #[test]
    fn usefulness_clamps_to_unit_interval() {
        assert_eq!(Usefulness::new(2.0).value(), 1.0);
        assert_eq!(Usefulness::new(-3.0).value(), -1.0);
        assert_eq!(Usefulness::default().value(), 0.0);
    }

    #[test]
    fn score_serde_roundtrip() {
        let score = ReputationScore::new(725);
        let json = serde_json::to_string(&score).unwrap();
        let back: ReputationScore = serde_json::from_str(&json).unwrap();
        assert_eq!(score, back);
    }
}
