use chrono::{DateTime, Utc};
use merit_core::Sentiment;

/// Asymmetric time decay.
///
/// Positive and neutral ratings never decay (1.0). Negative ratings decay
/// as `max(floor, e^(-age_days / tau_days))`, fading toward the floor as
/// they age past roughly one time constant. Ages are clamped at zero, so
/// a rating timestamped ahead of `now` keeps full weight.
pub fn calculate(
    sentiment: Sentiment,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    floor: f64,
    tau_days: f64,
) -> f64 {
    if !sentiment.is_negative() {
        return 1.0;
    }
    let age_days = (now - created_at).num_seconds().max(0) as f64 / 86400.0;
    (-age_days / tau_days).exp().max(floor)
}
