//! # merit-scoring
//!
//! The reputation aggregator: six multiplicative weighting rules
//! (reviewer credibility, sequence position, asymmetric time decay,
//! same-sentiment streaks, negative clustering, comment usefulness)
//! composed over a subject's full rating history.

pub mod comment;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod stats;

pub use comment::LengthHeuristic;
pub use engine::ReputationEngine;
pub use factors::ScoringContext;
pub use formula::{EventBreakdown, ScoreBreakdown};
