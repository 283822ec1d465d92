//! Memory utilization check.

use crate::error::{CheckConfigResult, RetrievalResult};
use crate::node::{NodeApi, NodeMemory};
use crate::thresholds::{usage_percent, Thresholds};
use probe_output::{human_bytes, Decision, PerfDatum, Unit};
use tracing::{debug, instrument};

/// Memory in use, measured as total minus available.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCheck {
    thresholds: Thresholds,
}

impl MemoryCheck {
    pub const NAME: &'static str = "MEMORY";

    pub fn new(warning: &str, critical: &str) -> CheckConfigResult<Self> {
        Ok(Self {
            thresholds: Thresholds::parse(warning, critical)?,
        })
    }

    #[instrument(skip(self, node), fields(check = "memory"))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let response = node.memory().await?;
        Ok(self.evaluate(response.as_ref()))
    }

    pub fn evaluate(&self, response: Option<&NodeMemory>) -> Decision {
        let Some(memory) = response else {
            return Decision::unknown("Empty response from Talos API");
        };
        let Some(meminfo) = memory.meminfo else {
            return Decision::unknown("No memory data in response");
        };
        if meminfo.mem_total_kib == 0 {
            return Decision::unknown("Invalid data: total memory is zero");
        }
        if meminfo.mem_available_kib > meminfo.mem_total_kib {
            return Decision::unknown("Invalid data: available memory exceeds total");
        }

        let total = meminfo.mem_total_kib.saturating_mul(1024);
        let available = meminfo.mem_available_kib.saturating_mul(1024);
        let used = total - available;

        let usage = usage_percent(used as f64, total as f64);
        let status = self.thresholds.classify(usage);
        debug!(usage, used, total, %status, "memory usage evaluated");

        Decision::new(
            status,
            format!(
                "Memory usage {usage:.1}% ({} / {})",
                human_bytes(used),
                human_bytes(total)
            ),
        )
        .with_perf_data(vec![
            PerfDatum::new("memory_usage", usage)
                .with_thresholds(self.thresholds.warning, self.thresholds.critical)
                .with_min("0")
                .with_max("100"),
            PerfDatum::new("memory_used", used as f64)
                .with_unit(Unit::Bytes)
                .with_min("0")
                .with_max(total),
            PerfDatum::new("memory_total", total as f64)
                .with_unit(Unit::Bytes)
                .with_min("0"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNode;
    use crate::node::MemInfo;
    use probe_output::{Report, Status};

    fn memory(total_kib: u64, available_kib: u64) -> NodeMemory {
        NodeMemory {
            meminfo: Some(MemInfo {
                mem_total_kib: total_kib,
                mem_available_kib: available_kib,
            }),
        }
    }

    #[test]
    fn test_usage_and_perf_data() {
        // 8 GiB total, 3 GiB available.
        let check = MemoryCheck::new("80", "90").unwrap();
        let decision = check.evaluate(Some(&memory(8_388_608, 3_145_728)));

        assert_eq!(decision.status, Status::Ok);
        assert_eq!(
            Report::new(MemoryCheck::NAME, decision).to_string(),
            "TALOS MEMORY OK - Memory usage 62.5% (5.00 GB / 8.00 GB) | \
             memory_usage=62.5;80;90;0;100 \
             memory_used=5368709120B;;;0;8589934592 \
             memory_total=8589934592B;;;0;"
        );
    }

    #[test]
    fn test_thresholds() {
        let check = MemoryCheck::new("80", "90").unwrap();
        assert_eq!(check.evaluate(Some(&memory(1000, 150))).status, Status::Warning);
        assert_eq!(check.evaluate(Some(&memory(1000, 50))).status, Status::Critical);
        assert_eq!(check.evaluate(Some(&memory(1000, 1000))).status, Status::Ok);
    }

    #[test]
    fn test_invalid_data() {
        let check = MemoryCheck::new("80", "90").unwrap();

        assert_eq!(check.evaluate(None).summary, "Empty response from Talos API");
        assert_eq!(
            check.evaluate(Some(&NodeMemory::default())).summary,
            "No memory data in response"
        );

        let zero = check.evaluate(Some(&memory(0, 0)));
        assert_eq!(zero.status, Status::Unknown);
        assert_eq!(zero.summary, "Invalid data: total memory is zero");
        assert!(zero.perf_data.is_empty());

        let over = check.evaluate(Some(&memory(100, 200)));
        assert_eq!(over.status, Status::Unknown);
        assert!(over.perf_data.is_empty());
    }

    #[tokio::test]
    async fn test_run() {
        let node = MockNode {
            memory: Some(Ok(Some(memory(1000, 500)))),
            ..MockNode::new()
        };
        let decision = MemoryCheck::new("80", "90").unwrap().run(&node).await.unwrap();
        assert_eq!(decision.summary, "Memory usage 50.0% (500.00 KB / 1000.00 KB)");
        assert_eq!(node.calls(), vec!["memory"]);
    }
}
