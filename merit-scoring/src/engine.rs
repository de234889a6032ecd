use merit_core::traits::{ICommentAnalyzer, IReputationEngine};
use merit_core::{RatingEvent, ReputationScore, ScoringConfig};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::comment::LengthHeuristic;
use crate::factors::ScoringContext;
use crate::formula::{self, ScoreBreakdown};

/// Reputation engine implementing the six-factor weighted aggregation.
///
/// Stateless and pure: every call recomputes from the full ordered
/// history. Safe to share across threads; callers serialize concurrent
/// recomputation of the same subject when persisting results.
pub struct ReputationEngine {
    config: ScoringConfig,
    analyzer: Box<dyn ICommentAnalyzer>,
}

impl ReputationEngine {
    /// Default config with the length-threshold comment heuristic.
    pub fn new() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    /// Create with a custom config.
    pub fn with_config(config: ScoringConfig) -> Self {
        let analyzer = Box::new(LengthHeuristic::new(config.comment_min_chars));
        Self { config, analyzer }
    }

    /// Swap in a different comment analyzer.
    pub fn with_analyzer(mut self, analyzer: Box<dyn ICommentAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Get the active config.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute a subject's reputation from its full ordered history at a
    /// pinned instant.
    pub fn compute_with_context(
        &self,
        events: &[RatingEvent],
        ctx: &ScoringContext,
    ) -> ReputationScore {
        let score = formula::compute(events, ctx, &self.config, self.analyzer.as_ref());
        debug!(events = events.len(), score = score.value(), "computed reputation");
        score
    }

    /// Compute with a full per-event factor breakdown.
    pub fn compute_breakdown(
        &self,
        events: &[RatingEvent],
        ctx: &ScoringContext,
    ) -> ScoreBreakdown {
        formula::compute_breakdown(events, ctx, &self.config, self.analyzer.as_ref())
    }

    /// Recompute every subject in a batch, all pinned to one instant.
    ///
    /// Parallel across subjects; each subject's history is an
    /// order-dependent single pass and is never split.
    pub fn recompute_batch(
        &self,
        histories: &[(String, Vec<RatingEvent>)],
    ) -> Vec<(String, ReputationScore)> {
        let ctx = ScoringContext::default();
        let scores: Vec<_> = histories
            .par_iter()
            .map(|(subject, events)| (subject.clone(), self.compute_with_context(events, &ctx)))
            .collect();
        info!(subjects = scores.len(), "batch reputation recompute complete");
        scores
    }
}

impl Default for ReputationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IReputationEngine for ReputationEngine {
    fn compute(&self, events: &[RatingEvent]) -> ReputationScore {
        // Default context: current wall-clock instant.
        self.compute_with_context(events, &ScoringContext::default())
    }
}
