//! check_talos - Nagios-compatible monitoring plugin for Talos Linux nodes
//!
//! Each invocation runs one check against one node and prints a single
//! status line, optionally followed by performance data and long text:
//!
//! ```text
//! TALOS CPU OK - CPU usage 34.2% | cpu_usage=34.2;80;90;0;100
//! ```
//!
//! The process exit code carries the status (0 OK, 1 WARNING, 2 CRITICAL,
//! 3 UNKNOWN). Diagnostics go to stderr so stdout stays machine-readable.

use clap::error::ErrorKind;
use clap::{Args, Parser};
use probe_output::{Decision, Report, Status};
use probe_talos::{ConnectionConfig, TalosClient, DEFAULT_TIMEOUT};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod duration;
mod error;
mod outcome;
mod validate;

pub use commands::Commands;
pub use config::CliConfig;
pub use duration::{format_duration, parse_duration};
pub use error::{CliError, CliResult};

/// Summary printed when no check is selected.
pub const NO_CHECK: &str =
    "No check specified. Usage: check_talos <cpu|memory|disk|services|etcd|load> [flags]";

/// check_talos application
#[derive(Debug, Parser)]
#[command(name = "check_talos")]
#[command(about = "Nagios-compatible monitoring plugin for Talos Linux nodes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Configuration file path
    #[arg(long, env = "CHECK_TALOS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// How to reach the node
#[derive(Debug, Args)]
struct ConnectionArgs {
    /// Talos API endpoint (host:port)
    #[arg(short = 'e', long = "talos-endpoint", global = true)]
    endpoint: Option<String>,

    /// Talos CA certificate (path or base64 PEM)
    #[arg(long = "talos-ca", global = true)]
    ca: Option<String>,

    /// Client certificate (path or base64 PEM)
    #[arg(long = "talos-cert", global = true)]
    cert: Option<String>,

    /// Client private key (path or base64 PEM)
    #[arg(long = "talos-key", global = true)]
    key: Option<String>,

    /// Path to talosconfig file
    #[arg(long, env = "TALOSCONFIG", global = true)]
    talosconfig: Option<PathBuf>,

    /// Named context within talosconfig
    #[arg(long = "talos-context", global = true)]
    context: Option<String>,

    /// Target node hostname or IP
    #[arg(short, long, global = true)]
    node: Option<String>,

    /// gRPC call timeout [default: 10s]
    #[arg(short, long, global = true, value_parser = parse_duration)]
    timeout: Option<Duration>,
}

impl ConnectionArgs {
    /// Fill unset flags from the config file.
    fn merge(self, file: CliConfig) -> ConnectionConfig {
        let timeout = self.timeout.or(file.timeout()).unwrap_or(DEFAULT_TIMEOUT);
        ConnectionConfig {
            endpoint: self.endpoint.or(file.endpoint),
            ca: self.ca.or(file.ca),
            cert: self.cert.or(file.cert),
            key: self.key.or(file.key),
            talosconfig: self.talosconfig.or(file.talosconfig),
            context: self.context.or(file.context),
            node: self.node.or(file.node),
            timeout,
        }
    }
}

/// What the process prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Text for stdout.
    pub stdout: String,
    /// Process exit code.
    pub exit_code: i32,
}

impl Execution {
    fn report(report: Report) -> Self {
        Self {
            stdout: report.to_string(),
            exit_code: report.exit_code(),
        }
    }

    /// Help and version output exit UNKNOWN.
    fn usage_text(text: String) -> Self {
        Self {
            stdout: text,
            exit_code: Status::Unknown.exit_code(),
        }
    }
}

/// Run using the current process arguments.
pub async fn run() -> Execution {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> Execution
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return parse_failure(&err),
    };

    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        return Execution::report(Report::usage(NO_CHECK));
    };
    let name = command.name();

    let file = match CliConfig::load(cli.config.as_deref()) {
        Ok(file) => file,
        Err(err) => {
            return Execution::report(Report::new(name, Decision::unknown(err.to_string())))
        }
    };
    let connection = cli.connection.merge(file);

    Execution::report(Report::new(name, execute(command, &connection).await))
}

/// Validate, connect and run one check.
async fn execute(command: Commands, connection: &ConnectionConfig) -> Decision {
    if let Err(err) = validate::validate_connection(connection) {
        return Decision::unknown(err.to_string());
    }
    let check = match command.build() {
        Ok(check) => check,
        Err(err) => return Decision::unknown(CliError::from(err).to_string()),
    };

    let client = match TalosClient::connect(connection) {
        Ok(client) => client,
        Err(err) => return outcome::setup_failure(&err),
    };

    match check.run(&client).await {
        Ok(decision) => {
            debug!(status = %decision.status, remaining = ?client.remaining(), "check finished");
            decision
        }
        Err(err) => {
            debug!(error = %err, "retrieval failed");
            outcome::retrieval_failure(&err, connection.timeout)
        }
    }
}

fn parse_failure(err: &clap::Error) -> Execution {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Execution::usage_text(err.to_string().trim_end().to_string())
        }
        _ => Execution::report(Report::usage(first_line(err))),
    }
}

/// First line of a clap error without its `error: ` prefix.
fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Logs go to stderr; stdout carries only the plugin output.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_args(args: &[&str]) -> Execution {
        let mut argv = vec!["check_talos", "--config", "/nonexistent/check-talos.toml"];
        argv.extend_from_slice(args);
        run_with_args(argv).await
    }

    #[tokio::test]
    async fn test_no_check() {
        let execution = run_args(&[]).await;
        assert_eq!(execution.stdout, format!("TALOS UNKNOWN - {NO_CHECK}"));
        assert_eq!(execution.exit_code, 3);
    }

    #[tokio::test]
    async fn test_help_exits_unknown() {
        let execution = run_args(&["--help"]).await;
        assert_eq!(execution.exit_code, 3);
        assert!(execution.stdout.contains("Usage:"));
        assert!(!execution.stdout.starts_with("TALOS"));
    }

    #[tokio::test]
    async fn test_version_exits_unknown() {
        let execution = run_args(&["--version"]).await;
        assert_eq!(execution.exit_code, 3);
        assert!(execution.stdout.contains(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unknown_flag() {
        let execution = run_args(&["cpu", "--bogus"]).await;
        assert_eq!(execution.exit_code, 3);
        assert!(execution.stdout.starts_with("TALOS UNKNOWN - "));
        assert!(!execution.stdout.contains('\n'));
    }

    #[tokio::test]
    async fn test_bad_timeout_value() {
        let execution = run_args(&["cpu", "--timeout", "soon"]).await;
        assert_eq!(execution.exit_code, 3);
        assert!(execution.stdout.starts_with("TALOS UNKNOWN - "));
    }

    #[tokio::test]
    async fn test_validation_names_check() {
        let execution = run_args(&["memory", "--talos-ca", "/etc/talos/ca.crt"]).await;
        assert_eq!(execution.exit_code, 3);
        assert_eq!(
            execution.stdout,
            "TALOS MEMORY UNKNOWN - Incomplete cert auth: missing --talos-cert, --talos-key"
        );
    }

    #[test]
    fn test_merge_prefers_flags() {
        let args = ConnectionArgs {
            endpoint: Some("10.0.0.1".into()),
            ca: None,
            cert: None,
            key: None,
            talosconfig: None,
            context: None,
            node: None,
            timeout: None,
        };
        let file = CliConfig {
            endpoint: Some("10.0.0.2".into()),
            node: Some("cp-1".into()),
            timeout_seconds: Some(30),
            ..CliConfig::default()
        };
        let merged = args.merge(file);
        assert_eq!(merged.endpoint.as_deref(), Some("10.0.0.1"));
        assert_eq!(merged.node.as_deref(), Some("cp-1"));
        assert_eq!(merged.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
