//! Connection flag validation.
//!
//! Runs before anything is loaded or sent. The first failure wins.

use crate::duration::format_duration;
use crate::error::{CliError, CliResult};
use probe_talos::pem::decode_pem;
use probe_talos::ConnectionConfig;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Upper bound for `--timeout`.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(120);

/// Check authentication, credential paths, endpoint and timeout.
pub fn validate_connection(config: &ConnectionConfig) -> CliResult<()> {
    let explicit = [
        ("--talos-ca", present(&config.ca)),
        ("--talos-cert", present(&config.cert)),
        ("--talos-key", present(&config.key)),
    ];
    let has_explicit = explicit.iter().any(|(_, value)| value.is_some());
    let talosconfig = config
        .talosconfig
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty());

    if has_explicit {
        let missing: Vec<&'static str> = explicit
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(flag, _)| *flag)
            .collect();
        if !missing.is_empty() {
            return Err(CliError::IncompleteCerts(missing));
        }
        for (flag, value) in explicit {
            if let Some(value) = value {
                check_credential(flag, value)?;
            }
        }
    } else if talosconfig.is_none() {
        return Err(CliError::NoAuthentication);
    }

    if let Some(path) = talosconfig {
        check_readable("--talosconfig", path)?;
    }

    if has_explicit && present(&config.endpoint).is_none() {
        return Err(CliError::NoEndpoint);
    }

    if config.timeout.is_zero() || config.timeout > MAX_TIMEOUT {
        return Err(CliError::InvalidTimeout(format_duration(config.timeout)));
    }

    Ok(())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// A credential is either a readable file or inline base64 PEM.
fn check_credential(flag: &'static str, value: &str) -> CliResult<()> {
    let path = Path::new(value);
    if path.exists() || decode_pem(value, flag).is_err() {
        return check_readable(flag, path);
    }
    Ok(())
}

fn check_readable(flag: &'static str, path: &Path) -> CliResult<()> {
    let unreadable = |reason: String| CliError::Unreadable {
        flag,
        path: path.display().to_string(),
        reason,
    };

    let metadata = std::fs::metadata(path).map_err(|e| unreadable(io_reason(&e)))?;
    if metadata.is_dir() {
        return Err(unreadable("is a directory".to_string()));
    }
    std::fs::File::open(path).map_err(|e| unreadable(io_reason(&e)))?;
    Ok(())
}

fn io_reason(error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => "no such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => error.to_string(),
    }
}
