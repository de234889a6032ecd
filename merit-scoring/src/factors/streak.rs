use merit_core::{constants, RatingEvent, Sentiment};

/// Streak length for each event: consecutive same-sentiment runs in
/// sequence order. A neutral rating breaks the run and never extends one,
/// so its own length is always 1.
pub fn lengths(events: &[RatingEvent]) -> Vec<u32> {
    let mut out = Vec::with_capacity(events.len());
    let mut prev: Option<Sentiment> = None;
    let mut run = 0u32;
    for event in events {
        let sentiment = event.sentiment();
        run = match (sentiment, prev) {
            (Sentiment::Neutral, _) => 1,
            (s, Some(p)) if s == p => run + 1,
            _ => 1,
        };
        prev = Some(sentiment);
        out.push(run);
    }
    out
}

/// Streak multiplier: `1.0 + min(length * 0.1, 1.0)`.
///
/// Range: 1.1 – 2.0; a run of ten or more hits the cap.
pub fn multiplier(length: u32) -> f64 {
    1.0 + (length as f64 * constants::STREAK_STEP).min(constants::STREAK_BONUS_CAP)
}
