use chrono::Duration;
use merit_core::{constants, RatingEvent};

/// Cluster size for each event: for a negative rating, how many negative
/// ratings (itself included) fall within `window_days` of it in either
/// direction, anywhere in the history. Non-negative ratings report 0.
///
/// Assumes the history is sorted ascending by `created_at`.
pub fn sizes(events: &[RatingEvent], window_days: i64) -> Vec<u32> {
    let window = Duration::days(window_days);
    let negative_times: Vec<_> = events
        .iter()
        .filter(|e| e.sentiment().is_negative())
        .map(|e| e.created_at)
        .collect();

    events
        .iter()
        .map(|event| {
            if !event.sentiment().is_negative() {
                return 0;
            }
            let lo = negative_times.partition_point(|t| *t < event.created_at - window);
            let hi = negative_times.partition_point(|t| *t <= event.created_at + window);
            (hi - lo) as u32
        })
        .collect()
}

/// Cluster multiplier: `1.0 + min((size - 2) * 0.2, 1.0)` once `size`
/// reaches `min_size`; 1.0 below it.
///
/// Range: 1.0 – 2.0. Positive and neutral ratings pass a size of 0 and
/// always get 1.0.
pub fn multiplier(size: u32, min_size: u32) -> f64 {
    if size < min_size {
        return 1.0;
    }
    1.0 + (size.saturating_sub(2) as f64 * constants::CLUSTER_STEP)
        .min(constants::CLUSTER_BONUS_CAP)
}
