//! Failure-to-decision mapping.
//!
//! A node that cannot be reached or does not answer in time is CRITICAL.
//! Anything that points at the plugin's own setup is UNKNOWN.

use crate::duration::format_duration;
use probe_checks::RetrievalError;
use probe_output::Decision;
use probe_talos::ClientError;
use std::time::Duration;

/// Decision for a failed retrieval call.
pub fn retrieval_failure(error: &RetrievalError, timeout: Duration) -> Decision {
    match error {
        RetrievalError::DeadlineExceeded(_) => Decision::critical(format!(
            "Talos API timeout after {}",
            format_duration(timeout)
        )),
        RetrievalError::Unavailable(message) => {
            Decision::critical(format!("Talos API unavailable: {message}"))
        }
        RetrievalError::Transport(message) => Decision::critical(message.clone()),
        RetrievalError::Unimplemented(_) => {
            Decision::unknown("RPC not supported (API version mismatch?)")
        }
        RetrievalError::PermissionDenied(message) => {
            Decision::unknown(format!("Permission denied: {message}"))
        }
        RetrievalError::Remote(message) => Decision::unknown(format!("Talos API error: {message}")),
    }
}

/// Decision for a client that could not be set up.
pub fn setup_failure(error: &ClientError) -> Decision {
    match error {
        ClientError::Transport(_) => Decision::critical(error.to_string()),
        _ => Decision::unknown(error.to_string()),
    }
}
