//! CLI error types

use probe_checks::CheckConfigError;
use thiserror::Error;

/// Invocation problems reported as UNKNOWN before any node is contacted.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "No authentication configured. Provide --talos-ca/--talos-cert/--talos-key or --talosconfig"
    )]
    NoAuthentication,

    #[error("Incomplete cert auth: missing {}", .0.join(", "))]
    IncompleteCerts(Vec<&'static str>),

    /// A credential or talosconfig path that cannot be used
    #[error("Cannot read {flag}: {path}: {reason}")]
    Unreadable {
        flag: &'static str,
        path: String,
        reason: String,
    },

    #[error("No endpoint configured. Provide --talos-endpoint or use --talosconfig")]
    NoEndpoint,

    #[error("Invalid timeout {0:?}: must be between 1s and 120s")]
    InvalidTimeout(String),

    /// Check flags that do not form a valid check
    #[error(transparent)]
    Check(#[from] CheckConfigError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
