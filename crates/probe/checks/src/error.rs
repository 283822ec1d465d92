//! Error types for check configuration and node retrieval

use probe_threshold::ThresholdError;
use thiserror::Error;

/// Result type alias for retrieval calls.
pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Result type alias for building a check from operator input.
pub type CheckConfigResult<T> = Result<T, CheckConfigError>;

/// Failure to fetch data from the node API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("unimplemented: {0}")]
    Unimplemented(String),

    #[error("remote error: {0}")]
    Remote(String),

    /// Connection or TLS failure before any RPC status was received.
    #[error("{0}")]
    Transport(String),
}

/// Invalid operator input for a check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckConfigError {
    #[error("Invalid warning threshold {text:?}: expected Nagios range format")]
    InvalidWarning {
        text: String,
        #[source]
        source: ThresholdError,
    },

    #[error("Invalid critical threshold {text:?}: expected Nagios range format")]
    InvalidCritical {
        text: String,
        #[source]
        source: ThresholdError,
    },

    #[error("Invalid --mount {0:?}: must be an absolute path")]
    InvalidMount(String),

    #[error("Cannot use both --include and --exclude")]
    ConflictingFilters,

    #[error("Invalid --min-members \"{0}\": must be >= 1")]
    InvalidMinMembers(i64),

    #[error("Invalid --period {0:?}: must be 1, 5, or 15")]
    InvalidPeriod(String),
}
