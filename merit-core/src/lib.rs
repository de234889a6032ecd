//! # merit-core
//!
//! Foundation crate for the merit reputation system.
//! Defines the domain types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod rating;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{MeritError, MeritResult};
pub use rating::{validate_history, RatingEvent, Sentiment};
pub use score::{ReputationScore, Usefulness};
