//! talosconfig file parsing

use crate::error::{ClientError, ClientResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The client configuration file written by `talosctl`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalosConfig {
    /// Name of the active context.
    #[serde(default)]
    pub context: String,

    /// Named contexts.
    #[serde(default)]
    pub contexts: BTreeMap<String, TalosContext>,
}

/// One cluster's endpoints and credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalosContext {
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Base64-encoded CA certificate.
    #[serde(default)]
    pub ca: String,

    /// Base64-encoded client certificate.
    #[serde(default)]
    pub crt: String,

    /// Base64-encoded client key.
    #[serde(default)]
    pub key: String,
}

impl TalosConfig {
    /// Read and parse a talosconfig file.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            ClientError::ReadTalosConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&contents).map_err(|source| ClientError::ParseTalosConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse talosconfig YAML.
    pub fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Select a context by name, or the active one.
    pub fn context(&self, name: Option<&str>) -> ClientResult<(&str, &TalosContext)> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ if !self.context.is_empty() => self.context.as_str(),
            _ => return Err(ClientError::NoContext),
        };
        self.contexts
            .get_key_value(name)
            .map(|(name, context)| (name.as_str(), context))
            .ok_or_else(|| ClientError::ContextNotFound(name.to_string()))
    }
}
