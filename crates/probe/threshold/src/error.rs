//! Error types for threshold parsing

use thiserror::Error;

/// Result type alias for threshold operations.
pub type ThresholdResult<T> = Result<T, ThresholdError>;

/// Which token of a range expression failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The token before the colon.
    Start,
    /// The token after the colon.
    End,
    /// A bare value with no colon.
    Value,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "start value"),
            Bound::End => write!(f, "end value"),
            Bound::Value => write!(f, "threshold value"),
        }
    }
}

/// Errors produced while parsing range notation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold must not be empty")]
    Empty,

    #[error("invalid {bound} {token:?}")]
    InvalidNumber { bound: Bound, token: String },

    #[error("start value {start} must not exceed end value {end}")]
    Inverted { start: String, end: String },
}
