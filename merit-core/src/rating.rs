use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{MeritError, MeritResult};
use crate::score::ReputationScore;

/// Sentiment classification of a star rating.
///
/// Every weighting rule that cares about polarity (decay, streaks,
/// clustering) classifies the same way: 4-5 stars positive, 1-2 stars
/// negative, 3 stars neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a star value.
    pub fn from_stars(stars: u8) -> Self {
        match stars {
            s if s >= 4 => Self::Positive,
            s if s <= 2 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

/// A single rating received by a subject.
///
/// Histories are ordered ascending by `created_at`; position in the
/// sequence affects the computed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEvent {
    /// Opaque identifier assigned by the ingestion layer.
    pub id: String,
    /// Star value, 1-5.
    pub stars: u8,
    /// When the rating was recorded.
    pub created_at: DateTime<Utc>,
    /// The author's reputation at computation time; neutral when unknown.
    pub reviewer_reputation: ReputationScore,
    /// Optional free-form review text.
    pub comment: Option<String>,
}

impl RatingEvent {
    /// Sentiment of this rating.
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_stars(self.stars)
    }

    /// Raw contribution on the -4..+4 scale (3 stars contribute 0).
    pub fn contribution(&self) -> f64 {
        (self.stars as f64 - 3.0) * constants::CONTRIBUTION_STEP
    }
}

/// Ingestion-side contract check: star range and ascending timestamps.
///
/// The aggregator assumes both hold and does not re-check; callers that
/// accept ratings from the outside run this before persisting.
pub fn validate_history(events: &[RatingEvent]) -> MeritResult<()> {
    for (index, event) in events.iter().enumerate() {
        if !(constants::STARS_MIN..=constants::STARS_MAX).contains(&event.stars) {
            return Err(MeritError::InvalidStars { stars: event.stars });
        }
        if index > 0 && event.created_at < events[index - 1].created_at {
            return Err(MeritError::UnsortedHistory { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn rating(stars: u8, created_at: DateTime<Utc>) -> RatingEvent {
        RatingEvent {
            id: format!("r-{stars}"),
            stars,
            created_at,
            reviewer_reputation: ReputationScore::neutral(),
            comment: None,
        }
    }

    #[test]
    fn sentiment_boundaries() {
        assert_eq!(Sentiment::from_stars(1), Sentiment::Negative);
        assert_eq!(Sentiment::from_stars(2), Sentiment::Negative);
        assert_eq!(Sentiment::from_stars(3), Sentiment::Neutral);
        assert_eq!(Sentiment::from_stars(4), Sentiment::Positive);
        assert_eq!(Sentiment::from_stars(5), Sentiment::Positive);
    }

    #[test]
    fn contribution_maps_stars_to_centered_scale() {
        let now = Utc::now();
        let values: Vec<f64> = (1..=5).map(|s| rating(s, now).contribution()).collect();
        assert_eq!(values, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn validate_accepts_sorted_history() {
        let now = Utc::now();
        let events = vec![
            rating(4, now - Duration::days(2)),
            rating(2, now - Duration::days(1)),
            rating(5, now),
        ];
        assert!(validate_history(&events).is_ok());
    }

    #[test]
    fn validate_rejects_unsorted_history() {
        let now = Utc::now();
        let events = vec![rating(4, now), rating(2, now - Duration::days(1))];
        let err = validate_history(&events).unwrap_err();
        assert!(matches!(err, MeritError::UnsortedHistory { index: 1 }));
    }

    #[test]
    fn validate_rejects_out_of_scale_stars() {
        let now = Utc::now();
        assert!(validate_history(&[rating(0, now)]).is_err());
        assert!(validate_history(&[rating(6, now)]).is_err());
    }

    #[test]
    fn rating_serde_roundtrip() {
        let event = RatingEvent {
            id: "r-1".to_string(),
            stars: 4,
            created_at: Utc::now(),
            reviewer_reputation: ReputationScore::new(720),
            comment: Some("solid work on the parser refactor".to_string()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: RatingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stars, 4);
        assert_eq!(back.reviewer_reputation.value(), 720);
    }
}
