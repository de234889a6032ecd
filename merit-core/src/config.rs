use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{MeritError, MeritResult};

/// Scoring configuration.
///
/// Defaults reproduce the production weighting rules. The score is a
/// deterministic function of the event history and a fixed config; deploys
/// that override these values must recompute all subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Floor of the negative-rating time decay.
    pub decay_floor: f64,
    /// Time constant of the negative-rating decay (days).
    pub decay_tau_days: f64,
    /// Clustering window for negative ratings (days).
    pub cluster_window_days: i64,
    /// Negatives within the window, the event itself included, before the
    /// cluster multiplier applies.
    pub cluster_min_size: u32,
    /// Minimum comment length in characters to count as useful.
    pub comment_min_chars: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay_floor: constants::DEFAULT_DECAY_FLOOR,
            decay_tau_days: constants::DEFAULT_DECAY_TAU_DAYS,
            cluster_window_days: constants::DEFAULT_CLUSTER_WINDOW_DAYS,
            cluster_min_size: constants::DEFAULT_CLUSTER_MIN_SIZE,
            comment_min_chars: constants::DEFAULT_COMMENT_MIN_CHARS,
        }
    }
}

impl ScoringConfig {
    /// Parse from a TOML document. Missing fields fall back to defaults.
    pub fn from_toml_str(raw: &str) -> MeritResult<Self> {
        toml::from_str(raw).map_err(|e| MeritError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_rules() {
        let config = ScoringConfig::default();
        assert_eq!(config.decay_floor, 0.3);
        assert_eq!(config.decay_tau_days, 365.0);
        assert_eq!(config.cluster_window_days, 90);
        assert_eq!(config.cluster_min_size, 3);
        assert_eq!(config.comment_min_chars, 20);
    }

    #[test]
    fn toml_overrides_individual_fields() {
        let config = ScoringConfig::from_toml_str("cluster_window_days = 30\n").unwrap();
        assert_eq!(config.cluster_window_days, 30);
        assert_eq!(config.decay_floor, 0.3);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ScoringConfig::from_toml_str("decay_floor = \"deep\"").unwrap_err();
        assert!(matches!(err, MeritError::Config { .. }));
    }
}
