//! Filesystem capacity check for a single mount point.

use crate::error::{CheckConfigError, CheckConfigResult, RetrievalResult};
use crate::node::{MountStat, NodeApi};
use crate::thresholds::{usage_percent, Thresholds};
use probe_output::{human_bytes, Decision, PerfDatum, Unit};
use tracing::{debug, instrument};

/// Default mount point.
pub const DEFAULT_MOUNT: &str = "/var";

/// Capacity used on the filesystem mounted at `mount`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskCheck {
    thresholds: Thresholds,
    mount: String,
}

impl DiskCheck {
    pub const NAME: &'static str = "DISK";

    pub fn new(warning: &str, critical: &str, mount: &str) -> CheckConfigResult<Self> {
        if !mount.starts_with('/') {
            return Err(CheckConfigError::InvalidMount(mount.to_string()));
        }
        Ok(Self {
            thresholds: Thresholds::parse(warning, critical)?,
            mount: mount.to_string(),
        })
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    #[instrument(skip(self, node), fields(check = "disk", mount = %self.mount))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let response = node.mounts().await?;
        Ok(self.evaluate(response.as_deref()))
    }

    pub fn evaluate(&self, response: Option<&[MountStat]>) -> Decision {
        let Some(mounts) = response else {
            return Decision::unknown("Empty response from Talos API");
        };
        if mounts.is_empty() {
            return Decision::unknown("No mount data in response");
        }
        let Some(stat) = mounts.iter().find(|m| m.mounted_on == self.mount) else {
            return Decision::unknown(format!("Mount point {} not found", self.mount));
        };

        if stat.size == 0 {
            return Decision::unknown(format!(
                "Invalid data: total capacity is zero for {}",
                self.mount
            ));
        }
        if stat.available > stat.size {
            return Decision::unknown(format!(
                "Invalid data: available capacity exceeds total for {}",
                self.mount
            ));
        }

        let used = stat.size - stat.available;
        let usage = usage_percent(used as f64, stat.size as f64);
        let status = self.thresholds.classify(usage);
        debug!(usage, used, size = stat.size, %status, "disk usage evaluated");

        Decision::new(
            status,
            format!(
                "{} usage {usage:.1}% ({} / {})",
                self.mount,
                human_bytes(used),
                human_bytes(stat.size)
            ),
        )
        .with_perf_data(vec![
            PerfDatum::new("disk_usage", usage)
                .with_thresholds(self.thresholds.warning, self.thresholds.critical)
                .with_min("0")
                .with_max("100"),
            PerfDatum::new("disk_used", used as f64)
                .with_unit(Unit::Bytes)
                .with_min("0")
                .with_max(stat.size),
            PerfDatum::new("disk_total", stat.size as f64)
                .with_unit(Unit::Bytes)
                .with_min("0"),
        ])
    }
}
