/// Merit system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neutral reputation assigned to a subject with no rating history.
pub const NEUTRAL_SCORE: u32 = 500;

/// Upper bound of the reputation range.
pub const SCORE_MAX: u32 = 1000;

/// Bounds of the star scale.
pub const STARS_MIN: u8 = 1;
pub const STARS_MAX: u8 = 5;

/// Raw contribution per star away from the neutral 3-star middle.
pub const CONTRIBUTION_STEP: f64 = 2.0;

/// Base of the reviewer-credibility weight (`0.5 + reputation / 1000`).
pub const CREDIBILITY_BASE: f64 = 0.5;

/// Span added to the position weight across the sequence.
pub const POSITION_SPAN: f64 = 0.5;

/// Streak multiplier step per run element and its bonus cap.
pub const STREAK_STEP: f64 = 0.1;
pub const STREAK_BONUS_CAP: f64 = 1.0;

/// Cluster multiplier step per extra clustered negative and its bonus cap.
pub const CLUSTER_STEP: f64 = 0.2;
pub const CLUSTER_BONUS_CAP: f64 = 1.0;

/// Base of the comment-usefulness multiplier.
pub const USEFULNESS_BASE: f64 = 0.5;

/// Floor of the negative-rating time decay.
pub const DEFAULT_DECAY_FLOOR: f64 = 0.3;

/// Time constant of the negative-rating decay, in days.
pub const DEFAULT_DECAY_TAU_DAYS: f64 = 365.0;

/// Window for clustering negative ratings, in days.
pub const DEFAULT_CLUSTER_WINDOW_DAYS: i64 = 90;

/// Negatives inside the window (the event itself included) before the
/// cluster multiplier activates.
pub const DEFAULT_CLUSTER_MIN_SIZE: u32 = 3;

/// Minimum comment length, in characters, for a comment to count as useful.
pub const DEFAULT_COMMENT_MIN_CHARS: usize = 20;
