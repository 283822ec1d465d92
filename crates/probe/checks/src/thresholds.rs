//! Warning/critical threshold pair shared by the threshold-based checks.

use crate::error::{CheckConfigError, CheckConfigResult};
use probe_output::Status;
use probe_threshold::ThresholdRange;
use tracing::warn;

/// A warning and a critical range evaluated against the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: ThresholdRange,
    pub critical: ThresholdRange,
}

impl Thresholds {
    /// Parse both ranges from operator input.
    pub fn parse(warning: &str, critical: &str) -> CheckConfigResult<Self> {
        let thresholds = Self {
            warning: parse_warning(warning)?,
            critical: parse_critical(critical)?,
        };
        thresholds.check_ordering();
        Ok(thresholds)
    }

    /// Critical first, then warning.
    pub fn classify(&self, value: f64) -> Status {
        if self.critical.violated(value) {
            Status::Critical
        } else if self.warning.violated(value) {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Whether the warning range reaches past the critical one.
    ///
    /// Only simple bounded ranges are compared.
    pub fn warning_wider_than_critical(&self) -> bool {
        self.warning.is_bounded()
            && self.critical.is_bounded()
            && self.warning.end() > self.critical.end()
    }

    /// Log when the warning range is wider than the critical range.
    pub fn check_ordering(&self) {
        if self.warning_wider_than_critical() {
            warn!(
                warning = %self.warning,
                critical = %self.critical,
                "-w range is wider than -c range"
            );
        }
    }
}

pub(crate) fn parse_warning(text: &str) -> CheckConfigResult<ThresholdRange> {
    ThresholdRange::parse(text).map_err(|source| CheckConfigError::InvalidWarning {
        text: text.to_string(),
        source,
    })
}

pub(crate) fn parse_critical(text: &str) -> CheckConfigResult<ThresholdRange> {
    ThresholdRange::parse(text).map_err(|source| CheckConfigError::InvalidCritical {
        text: text.to_string(),
        source,
    })
}

/// Percentage of `part` in `whole`, rounded to one decimal.
///
/// Thresholds are compared against this rounded value, so `80.04` reads as
/// `80.0` for both the summary and the alert decision.
pub fn usage_percent(part: f64, whole: f64) -> f64 {
    (part / whole * 100.0 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_checks_critical_first() {
        let t = Thresholds::parse("80", "90").unwrap();
        assert_eq!(t.classify(50.0), Status::Ok);
        assert_eq!(t.classify(80.0), Status::Ok);
        assert_eq!(t.classify(80.1), Status::Warning);
        assert_eq!(t.classify(90.0), Status::Warning);
        assert_eq!(t.classify(90.1), Status::Critical);
    }

    #[test]
    fn test_classify_critical_wins_when_both_violated() {
        let t = Thresholds::parse("10", "5").unwrap();
        assert_eq!(t.classify(7.0), Status::Critical);
    }

    #[test]
    fn test_parse_errors_name_the_flag() {
        let err = Thresholds::parse("abc", "90").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid warning threshold "abc": expected Nagios range format"#
        );
        let err = Thresholds::parse("80", "20:10").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid critical threshold "20:10": expected Nagios range format"#
        );
    }

    #[test]
    fn test_wider_warning_detected() {
        assert!(Thresholds::parse("95", "90").unwrap().warning_wider_than_critical());
        assert!(!Thresholds::parse("80", "90").unwrap().warning_wider_than_critical());
        assert!(!Thresholds::parse("~:95", "90").unwrap().warning_wider_than_critical());
        assert!(!Thresholds::parse("@95", "90").unwrap().warning_wider_than_critical());
        assert!(!Thresholds::parse("95:", "90").unwrap().warning_wider_than_critical());
    }

    #[test]
    fn test_usage_percent_rounding() {
        assert_eq!(usage_percent(342.0, 1000.0), 34.2);
        assert_eq!(usage_percent(8004.0, 10000.0), 80.0);
        assert_eq!(usage_percent(8006.0, 10000.0), 80.1);
        assert_eq!(usage_percent(0.0, 10.0), 0.0);
        assert_eq!(usage_percent(10.0, 10.0), 100.0);
    }

    proptest! {
        #[test]
        fn property_usage_percent_bounded(whole in 1u64..u64::MAX / 2, share in 0.0f64..=1.0) {
            let part = (whole as f64 * share).floor();
            let pct = usage_percent(part, whole as f64);
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        #[test]
        fn property_warning_only_below_critical(value in -200.0f64..200.0) {
            let t = Thresholds::parse("~:50", "~:80").unwrap();
            let status = t.classify(value);
            prop_assert_eq!(status == Status::Critical, value > 80.0);
            prop_assert_eq!(status == Status::Warning, value > 50.0 && value <= 80.0);
        }
    }
}
