//! CPU utilization check.

use crate::error::{CheckConfigResult, RetrievalResult};
use crate::node::{NodeApi, SystemStat};
use crate::thresholds::{usage_percent, Thresholds};
use probe_output::{Decision, PerfDatum};
use tracing::{debug, instrument};

/// Share of CPU time spent busy, from the aggregate counters.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuCheck {
    thresholds: Thresholds,
}

impl CpuCheck {
    pub const NAME: &'static str = "CPU";

    pub fn new(warning: &str, critical: &str) -> CheckConfigResult<Self> {
        Ok(Self {
            thresholds: Thresholds::parse(warning, critical)?,
        })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    #[instrument(skip(self, node), fields(check = "cpu"))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let response = node.system_stat().await?;
        Ok(self.evaluate(response.as_ref()))
    }

    pub fn evaluate(&self, response: Option<&SystemStat>) -> Decision {
        let Some(stat) = response else {
            return Decision::unknown("Empty response from Talos API");
        };
        let Some(cpu) = stat.cpu_total else {
            return Decision::unknown("No CPU data in response");
        };

        let total = cpu.total();
        if total == 0.0 {
            return Decision::unknown("Invalid data: total CPU time is zero");
        }

        let usage = usage_percent(cpu.active(), total);
        let status = self.thresholds.classify(usage);
        debug!(usage, total, %status, "cpu usage evaluated");

        Decision::new(status, format!("CPU usage {usage:.1}%")).with_perf_data(vec![
            PerfDatum::new("cpu_usage", usage)
                .with_thresholds(self.thresholds.warning, self.thresholds.critical)
                .with_min("0")
                .with_max("100"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNode;
    use crate::node::CpuStat;
    use probe_output::{Report, Status};

    fn stat(user: f64, system: f64, idle: f64, iowait: f64) -> SystemStat {
        SystemStat {
            cpu_total: Some(CpuStat {
                user,
                system,
                idle,
                iowait,
                ..CpuStat::default()
            }),
            cpu_count: 4,
        }
    }

    #[test]
    fn test_usage_within_limits() {
        let check = CpuCheck::new("80", "90").unwrap();
        let decision = check.evaluate(Some(&stat(242.0, 100.0, 600.0, 58.0)));

        assert_eq!(decision.status, Status::Ok);
        assert_eq!(decision.summary, "CPU usage 34.2%");
        assert_eq!(
            Report::new(CpuCheck::NAME, decision).to_string(),
            "TALOS CPU OK - CPU usage 34.2% | cpu_usage=34.2;80;90;0;100"
        );
    }

    #[test]
    fn test_iowait_counts_as_idle() {
        let check = CpuCheck::new("80", "90").unwrap();
        let decision = check.evaluate(Some(&stat(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(decision.summary, "CPU usage 0.0%");
        assert_eq!(decision.status, Status::Ok);
    }

    #[test]
    fn test_warning_and_critical() {
        let check = CpuCheck::new("80", "90").unwrap();
        assert_eq!(check.evaluate(Some(&stat(85.0, 0.0, 15.0, 0.0))).status, Status::Warning);
        assert_eq!(check.evaluate(Some(&stat(95.0, 0.0, 5.0, 0.0))).status, Status::Critical);
        assert_eq!(check.evaluate(Some(&stat(90.0, 0.0, 10.0, 0.0))).status, Status::Warning);
    }

    #[test]
    fn test_rounded_value_is_compared() {
        // 80.04% rounds to 80.0, which is inside 0..80.
        let check = CpuCheck::new("80", "90").unwrap();
        let decision = check.evaluate(Some(&stat(8004.0, 0.0, 1996.0, 0.0)));
        assert_eq!(decision.status, Status::Ok);
        assert_eq!(decision.summary, "CPU usage 80.0%");
    }

    #[test]
    fn test_missing_data_is_unknown() {
        let check = CpuCheck::new("80", "90").unwrap();

        let empty = check.evaluate(None);
        assert_eq!(empty.status, Status::Unknown);
        assert_eq!(empty.summary, "Empty response from Talos API");
        assert!(empty.perf_data.is_empty());

        let no_cpu = check.evaluate(Some(&SystemStat::default()));
        assert_eq!(no_cpu.summary, "No CPU data in response");
        assert!(no_cpu.perf_data.is_empty());

        let zero = check.evaluate(Some(&stat(0.0, 0.0, 0.0, 0.0)));
        assert_eq!(zero.summary, "Invalid data: total CPU time is zero");
        assert!(zero.perf_data.is_empty());
    }

    #[tokio::test]
    async fn test_run_uses_system_stat() {
        let node = MockNode {
            system_stat: Some(Ok(Some(stat(95.0, 0.0, 5.0, 0.0)))),
            ..MockNode::new()
        };
        let check = CpuCheck::new("80", "90").unwrap();
        let decision = check.run(&node).await.unwrap();
        assert_eq!(decision.status, Status::Critical);
        assert_eq!(node.calls(), vec!["system_stat"]);
    }

    #[tokio::test]
    async fn test_run_propagates_retrieval_errors() {
        let node = MockNode {
            system_stat: Some(Err(crate::RetrievalError::Unavailable("down".into()))),
            ..MockNode::new()
        };
        let check = CpuCheck::new("80", "90").unwrap();
        assert!(check.run(&node).await.is_err());
    }
}
