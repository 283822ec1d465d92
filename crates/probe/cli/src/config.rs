//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Connection defaults read from `config.toml`.
///
/// Command-line flags and environment variables take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Talos API endpoint
    pub endpoint: Option<String>,

    /// Path to a talosconfig file
    pub talosconfig: Option<PathBuf>,

    /// Named context within the talosconfig
    pub context: Option<String>,

    /// Target node
    pub node: Option<String>,

    /// CA certificate (path or base64 PEM)
    pub ca: Option<String>,

    /// Client certificate (path or base64 PEM)
    pub cert: Option<String>,

    /// Client key (path or base64 PEM)
    pub key: Option<String>,

    /// Call timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(CliConfig::default()),
            },
        };

        if !config_path.exists() {
            return Ok(CliConfig::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| CliError::Config(format!("{}: {e}", config_path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {e}", config_path.display())))
    }

    /// Timeout from the file, if set.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Get the default configuration file path
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("check-talos").join("config.toml"))
    }
}
