use merit_core::constants;

/// Position weight: `1.0 + (index / total) * 0.5` for the 0-indexed
/// position among `total` events.
///
/// Range: 1.0 – 1.5 (exclusive). Later ratings in the sequence weigh
/// more, independent of wall-clock age. A single-element history weighs
/// 1.0. `total` must be non-zero.
pub fn calculate(index: usize, total: usize) -> f64 {
    1.0 + (index as f64 / total as f64) * constants::POSITION_SPAN
}
