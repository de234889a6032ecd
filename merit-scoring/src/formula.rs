use merit_core::constants;
use merit_core::traits::ICommentAnalyzer;
use merit_core::{RatingEvent, ReputationScore, ScoringConfig};

use crate::factors::{self, ScoringContext};

/// Six-factor multiplicative weighting formula.
///
/// ```text
/// weight_i = credibility × position × decay × streak × cluster × usefulness
/// score    = round(clamp(500 + Σ(contribution_i × weight_i) / Σ(weight_i), 0, 1000))
/// ```
///
/// An empty history short-circuits to the neutral 500. A zero weight sum
/// (every event suppressed by a 0.0 usefulness multiplier) contributes
/// nothing instead of dividing by zero. All intermediate arithmetic is
/// floating point; rounding happens once, in `ReputationScore::from_f64`.
pub fn compute(
    events: &[RatingEvent],
    ctx: &ScoringContext,
    config: &ScoringConfig,
    analyzer: &dyn ICommentAnalyzer,
) -> ReputationScore {
    if events.is_empty() {
        return ReputationScore::neutral();
    }

    let streaks = factors::streak::lengths(events);
    let clusters = factors::cluster::sizes(events, config.cluster_window_days);

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (index, event) in events.iter().enumerate() {
        let weight = event_weight(
            event,
            index,
            events.len(),
            streaks[index],
            clusters[index],
            ctx,
            config,
            analyzer,
        );
        weighted_sum += event.contribution() * weight;
        weight_sum += weight;
    }

    let average = if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    };
    ReputationScore::from_f64(constants::NEUTRAL_SCORE as f64 + average)
}

#[allow(clippy::too_many_arguments)]
fn event_weight(
    event: &RatingEvent,
    index: usize,
    total: usize,
    streak_length: u32,
    cluster_size: u32,
    ctx: &ScoringContext,
    config: &ScoringConfig,
    analyzer: &dyn ICommentAnalyzer,
) -> f64 {
    factors::credibility::calculate(event.reviewer_reputation)
        * factors::position::calculate(index, total)
        * factors::decay::calculate(
            event.sentiment(),
            event.created_at,
            ctx.now,
            config.decay_floor,
            config.decay_tau_days,
        )
        * factors::streak::multiplier(streak_length)
        * factors::cluster::multiplier(cluster_size, config.cluster_min_size)
        * factors::usefulness::multiplier(analyzer.usefulness(event.comment.as_deref()))
}

/// Per-event factor breakdown for debugging and observability.
#[derive(Debug, Clone)]
pub struct EventBreakdown {
    pub rating_id: String,
    pub contribution: f64,
    pub credibility: f64,
    pub position: f64,
    pub decay: f64,
    pub streak: f64,
    pub cluster: f64,
    pub usefulness: f64,
    pub weight: f64,
}

/// Full scoring breakdown: every factor of every event plus the totals.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub events: Vec<EventBreakdown>,
    pub weight_sum: f64,
    pub average_contribution: f64,
    pub score: ReputationScore,
}

/// Compute the score with a full per-event factor breakdown.
pub fn compute_breakdown(
    events: &[RatingEvent],
    ctx: &ScoringContext,
    config: &ScoringConfig,
    analyzer: &dyn ICommentAnalyzer,
) -> ScoreBreakdown {
    let streaks = factors::streak::lengths(events);
    let clusters = factors::cluster::sizes(events, config.cluster_window_days);

    let mut rows = Vec::with_capacity(events.len());
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (index, event) in events.iter().enumerate() {
        let credibility = factors::credibility::calculate(event.reviewer_reputation);
        let position = factors::position::calculate(index, events.len());
        let decay = factors::decay::calculate(
            event.sentiment(),
            event.created_at,
            ctx.now,
            config.decay_floor,
            config.decay_tau_days,
        );
        let streak = factors::streak::multiplier(streaks[index]);
        let cluster = factors::cluster::multiplier(clusters[index], config.cluster_min_size);
        let usefulness =
            factors::usefulness::multiplier(analyzer.usefulness(event.comment.as_deref()));

        let weight = credibility * position * decay * streak * cluster * usefulness;
        weighted_sum += event.contribution() * weight;
        weight_sum += weight;

        rows.push(EventBreakdown {
            rating_id: event.id.clone(),
            contribution: event.contribution(),
            credibility,
            position,
            decay,
            streak,
            cluster,
            usefulness,
            weight,
        });
    }

    let average_contribution = if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    };
    let score = if events.is_empty() {
        ReputationScore::neutral()
    } else {
        ReputationScore::from_f64(constants::NEUTRAL_SCORE as f64 + average_contribution)
    };

    ScoreBreakdown {
        events: rows,
        weight_sum,
        average_contribution,
        score,
    }
}
