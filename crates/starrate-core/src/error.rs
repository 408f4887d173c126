//! Rating errors.

use thiserror::Error;

/// Errors raised while building or rendering a rating.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("Rating is not a finite number: {0}")]
    NonFiniteRating(f64),
    #[error("Icon size must be positive and finite, got {0}")]
    InvalidIconSize(f64),
}

/// Result type for rating operations.
pub type RatingResult<T> = Result<T, RatingError>;
