/// Errors surfaced by ingestion-side validation and config loading.
///
/// The aggregator itself is failure-free: it returns a score for every
/// well-formed history, including the empty one.
#[derive(Debug, thiserror::Error)]
pub enum MeritError {
    #[error("star rating {stars} outside the 1-5 scale")]
    InvalidStars { stars: u8 },

    #[error("reputation value {value} outside the 0-1000 range")]
    ReputationOutOfRange { value: i64 },

    #[error("rating history not sorted by creation time at index {index}")]
    UnsortedHistory { index: usize },

    #[error("config error: {message}")]
    Config { message: String },
}

pub type MeritResult<T> = Result<T, MeritError>;
