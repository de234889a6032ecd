use crate::rating::RatingEvent;
use crate::score::{ReputationScore, Usefulness};

/// Full-history reputation computation.
///
/// Implementations are pure: the score is recomputed from the complete
/// ordered history on every call, never updated incrementally.
pub trait IReputationEngine: Send + Sync {
    /// Recompute a subject's reputation from its complete ordered history.
    fn compute(&self, events: &[RatingEvent]) -> ReputationScore;
}

/// Comment quality analysis.
///
/// Narrow seam so the current length heuristic can be swapped for a real
/// text analyzer without touching the aggregator.
pub trait ICommentAnalyzer: Send + Sync {
    /// Score a comment's usefulness in [-1, 1]. `None` means no comment.
    fn usefulness(&self, comment: Option<&str>) -> Usefulness;
}
