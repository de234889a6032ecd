use merit_core::RatingEvent;

/// Unweighted star summary: plain mean and count.
///
/// Surfaced alongside the weighted reputation in rating listings; an
/// empty history reports (0.0, 0).
pub fn star_summary(events: &[RatingEvent]) -> (f64, usize) {
    if events.is_empty() {
        return (0.0, 0);
    }
    let sum: u32 = events.iter().map(|e| e.stars as u32).sum();
    (sum as f64 / events.len() as f64, events.len())
}
