use merit_core::{constants, Usefulness};

/// Comment-usefulness multiplier: `max(0.0, 0.5 + usefulness * 0.5)`.
///
/// Maps -1 → 0.0x (spam), 0 → 0.5x (no signal), +1 → 1.0x.
pub fn multiplier(usefulness: Usefulness) -> f64 {
    (constants::USEFULNESS_BASE + usefulness.value() * 0.5).max(0.0)
}
