use chrono::{DateTime, Utc};

pub mod cluster;
pub mod credibility;
pub mod decay;
pub mod position;
pub mod streak;
pub mod usefulness;

/// Evaluation context for a scoring run.
///
/// `now` is an explicit input: replaying the same history with the same
/// instant yields the same score. Only the negative-rating decay reads it.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    pub now: DateTime<Utc>,
}

impl ScoringContext {
    /// Pin the evaluation instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}
