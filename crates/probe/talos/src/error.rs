//! Error types for the Talos client

use probe_checks::RetrievalError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client setup.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures while preparing a connection.
///
/// These are configuration problems: nothing has been sent to the node yet.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no authentication configured")]
    NoAuthentication,

    #[error("No endpoint configured. Provide --talos-endpoint or use --talosconfig")]
    NoEndpoint,

    #[error("invalid {description}: not a valid file path or base64-encoded data")]
    InvalidCredential { description: &'static str },

    #[error("invalid {description}: decoded data is not valid PEM format")]
    NotPem { description: &'static str },

    #[error("reading {description} from file: {source}")]
    ReadCredential {
        description: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("reading talosconfig {path}: {source}")]
    ReadTalosConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing talosconfig {path}: {source}")]
    ParseTalosConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("talosconfig has no context selected")]
    NoContext,

    #[error("context {0:?} not found in talosconfig")]
    ContextNotFound(String),

    #[error("context {context:?} has no {field}")]
    MissingContextField {
        context: String,
        field: &'static str,
    },

    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid node {0:?}: not a valid metadata value")]
    InvalidNode(String),

    #[error("creating Talos client: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Classify an RPC failure.
///
/// Statuses synthesized from a connection or TLS failure carry the transport
/// error as their source.
pub fn classify_status(status: &tonic::Status) -> RetrievalError {
    let message = status.message().to_string();
    match status.code() {
        tonic::Code::DeadlineExceeded => RetrievalError::DeadlineExceeded(message),
        tonic::Code::Unavailable => RetrievalError::Unavailable(message),
        tonic::Code::PermissionDenied => RetrievalError::PermissionDenied(message),
        tonic::Code::Unimplemented => RetrievalError::Unimplemented(message),
        _ if is_transport_failure(status) => RetrievalError::Transport(message),
        _ => RetrievalError::Remote(message),
    }
}

fn is_transport_failure(status: &tonic::Status) -> bool {
    std::error::Error::source(status)
        .is_some_and(|source| source.is::<tonic::transport::Error>())
}
