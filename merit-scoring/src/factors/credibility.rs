use merit_core::constants;
use merit_core::ReputationScore;

/// Reviewer-credibility weight: `0.5 + reputation / 1000`.
///
/// Range: 0.5 – 1.5. A neutral (500) reviewer weighs 1.0x; reviewer
/// reputation is already bounded by the newtype, so no further clamp.
pub fn calculate(reviewer_reputation: ReputationScore) -> f64 {
    constants::CREDIBILITY_BASE
        + reviewer_reputation.value() as f64 / constants::SCORE_MAX as f64
}
