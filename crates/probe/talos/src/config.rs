//! Connection settings and credential resolution.

use crate::endpoint::endpoint_uri;
use crate::error::{ClientError, ClientResult};
use crate::pem::{decode_pem, load_pem};
use crate::talosconfig::TalosConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Default overall deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How to reach and authenticate to a Talos node.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// apid endpoint; overrides the talosconfig endpoints.
    pub endpoint: Option<String>,
    /// CA certificate, as a path or base64 PEM.
    pub ca: Option<String>,
    /// Client certificate, as a path or base64 PEM.
    pub cert: Option<String>,
    /// Client key, as a path or base64 PEM.
    pub key: Option<String>,
    pub talosconfig: Option<PathBuf>,
    pub context: Option<String>,
    /// Node apid should proxy calls to.
    pub node: Option<String>,
    /// Bounds the whole invocation.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            ca: None,
            cert: None,
            key: None,
            talosconfig: None,
            context: None,
            node: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Resolved endpoint and PEM material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub uri: String,
    pub ca: Vec<u8>,
    pub cert: Vec<u8>,
    pub key: Vec<u8>,
}

impl ConnectionConfig {
    /// All three of CA, cert and key were given.
    pub fn has_explicit_certs(&self) -> bool {
        [&self.ca, &self.cert, &self.key]
            .into_iter()
            .all(|value| non_empty(value).is_some())
    }

    /// Target node, if any.
    pub fn node(&self) -> Option<&str> {
        non_empty(&self.node)
    }

    /// Load credentials and pick the endpoint.
    ///
    /// Explicit certificates win over a talosconfig file.
    pub fn resolve(&self) -> ClientResult<Credentials> {
        let endpoint = non_empty(&self.endpoint);

        if let (Some(ca), Some(cert), Some(key)) = (
            non_empty(&self.ca),
            non_empty(&self.cert),
            non_empty(&self.key),
        ) {
            let endpoint = endpoint.ok_or(ClientError::NoEndpoint)?;
            debug!(endpoint, "using explicit certificates");
            return Ok(Credentials {
                uri: endpoint_uri(endpoint)?,
                ca: load_pem(ca, "CA certificate")?,
                cert: load_pem(cert, "client certificate")?,
                key: load_pem(key, "client key")?,
            });
        }

        let path = match &self.talosconfig {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(ClientError::NoAuthentication),
        };
        let config = TalosConfig::load(path)?;
        let (name, context) = config.context(non_empty(&self.context))?;
        debug!(path = %path.display(), context = name, "using talosconfig");

        let endpoint = match endpoint {
            Some(endpoint) => endpoint,
            None => context
                .endpoints
                .first()
                .map(String::as_str)
                .ok_or(ClientError::NoEndpoint)?,
        };

        let field = |value: &str, field: &'static str| -> ClientResult<Vec<u8>> {
            if value.is_empty() {
                return Err(ClientError::MissingContextField {
                    context: name.to_string(),
                    field,
                });
            }
            decode_pem(value, field)
        };

        Ok(Credentials {
            uri: endpoint_uri(endpoint)?,
            ca: field(&context.ca, "CA certificate")?,
            cert: field(&context.crt, "client certificate")?,
            key: field(&context.key, "client key")?,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
