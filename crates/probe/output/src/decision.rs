//! Check decision record

use crate::perf::PerfDatum;
use crate::status::Status;

/// What a check concluded about the node.
///
/// Perf data is only attached when the remote call returned data; failures
/// that happen before any data arrives carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Overall status.
    pub status: Status,
    /// One-line summary.
    pub summary: String,
    /// Optional multi-line long text.
    pub details: Option<String>,
    /// Ordered measurements.
    pub perf_data: Vec<PerfDatum>,
}

impl Decision {
    /// Create a decision with no details or perf data.
    pub fn new(status: Status, summary: impl Into<String>) -> Self {
        Self {
            status,
            summary: summary.into(),
            details: None,
            perf_data: Vec::new(),
        }
    }

    /// Shorthand for an UNKNOWN decision.
    pub fn unknown(summary: impl Into<String>) -> Self {
        Self::new(Status::Unknown, summary)
    }

    /// Shorthand for a CRITICAL decision.
    pub fn critical(summary: impl Into<String>) -> Self {
        Self::new(Status::Critical, summary)
    }

    /// Attach perf data.
    pub fn with_perf_data(mut self, perf_data: Vec<PerfDatum>) -> Self {
        self.perf_data = perf_data;
        self
    }

    /// Attach long text. Empty text is ignored.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        self.details = if details.is_empty() { None } else { Some(details) };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_has_no_perf_data() {
        let decision = Decision::unknown("No CPU data in response");
        assert_eq!(decision.status, Status::Unknown);
        assert!(decision.perf_data.is_empty());
        assert!(decision.details.is_none());
    }

    #[test]
    fn test_empty_details_dropped() {
        let decision = Decision::new(Status::Ok, "fine").with_details("");
        assert!(decision.details.is_none());
    }
}
