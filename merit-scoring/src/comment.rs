use merit_core::constants;
use merit_core::traits::ICommentAnalyzer;
use merit_core::Usefulness;

/// Length-threshold comment heuristic.
///
/// Absent comments and comments under the threshold score 0.0; longer
/// comments score 1.0. The spam score (-1.0) is reserved for future
/// analyzers; this one never emits it.
#[derive(Debug, Clone)]
pub struct LengthHeuristic {
    min_chars: usize,
}

impl LengthHeuristic {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl Default for LengthHeuristic {
    fn default() -> Self {
        Self::new(constants::DEFAULT_COMMENT_MIN_CHARS)
    }
}

impl ICommentAnalyzer for LengthHeuristic {
    fn usefulness(&self, comment: Option<&str>) -> Usefulness {
        match comment {
            Some(text) if text.chars().count() >= self.min_chars => Usefulness::new(1.0),
            _ => Usefulness::new(0.0),
        }
    }
}
