//! Final plugin output.
//!
//! ```text
//! TALOS <CHECK> <STATUS> - <summary>[ | <perf data>]
//! [<details>]
//! ```

use crate::decision::Decision;
use crate::perf::format_perf_data;
use crate::status::Status;

/// Product prefix on every status line.
pub const PREFIX: &str = "TALOS";

/// A decision bound to the check that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    check: Option<String>,
    decision: Decision,
}

impl Report {
    /// Report for a named check (`CPU`, `ETCD`, ...).
    pub fn new(check: impl Into<String>, decision: Decision) -> Self {
        Self {
            check: Some(check.into()),
            decision,
        }
    }

    /// Report produced before any check was resolved (usage errors).
    pub fn usage(summary: impl Into<String>) -> Self {
        Self {
            check: None,
            decision: Decision::unknown(summary),
        }
    }

    /// The underlying decision.
    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    /// Status of the underlying decision.
    pub fn status(&self) -> Status {
        self.decision.status
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        self.decision.status.exit_code()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.check {
            Some(check) => write!(
                f,
                "{PREFIX} {check} {} - {}",
                self.decision.status, self.decision.summary
            )?,
            None => write!(f, "{PREFIX} {} - {}", self.decision.status, self.decision.summary)?,
        }

        if !self.decision.perf_data.is_empty() {
            write!(f, " | {}", format_perf_data(&self.decision.perf_data))?;
        }

        if let Some(details) = &self.decision.details {
            write!(f, "\n{details}")?;
        }

        Ok(())
    }
}
