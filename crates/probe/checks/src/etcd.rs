//! Etcd cluster health check.
//!
//! Structural assertions come first (leader, quorum size, alarms); the
//! database size threshold is only consulted when all of them pass.

use crate::error::{CheckConfigError, CheckConfigResult, RetrievalResult};
use crate::node::{AlarmKind, EtcdMemberStatus, NodeApi};
use crate::thresholds::Thresholds;
use probe_output::{human_bytes, Decision, PerfDatum, Unit};
use tracing::{debug, instrument};

/// Default warning range for the database size, in bytes.
pub const DEFAULT_WARNING: &str = "~:100000000";

/// Default critical range for the database size, in bytes.
pub const DEFAULT_CRITICAL: &str = "~:200000000";

/// Default minimum member count.
pub const DEFAULT_MIN_MEMBERS: usize = 3;

/// Everything the etcd check needs, gathered from three calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtcdSample {
    pub member_status: EtcdMemberStatus,
    pub member_count: usize,
    pub alarms: Vec<AlarmKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EtcdCheck {
    thresholds: Thresholds,
    min_members: usize,
}

impl EtcdCheck {
    pub const NAME: &'static str = "ETCD";

    pub fn new(warning: &str, critical: &str, min_members: i64) -> CheckConfigResult<Self> {
        let min_members = usize::try_from(min_members)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or(CheckConfigError::InvalidMinMembers(min_members))?;
        Ok(Self {
            thresholds: Thresholds::parse(warning, critical)?,
            min_members,
        })
    }

    /// Status, then member list, then alarms.
    #[instrument(skip(self, node), fields(check = "etcd"))]
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        let Some(status) = node.etcd_status().await? else {
            return Ok(Decision::unknown("Empty response from Talos API"));
        };
        let Some(member_status) = status.member_status else {
            return Ok(Decision::unknown("No etcd status data in response"));
        };

        let Some(members) = node.etcd_member_list().await? else {
            return Ok(Decision::unknown(
                "Empty member list response from Talos API",
            ));
        };

        let alarms = node
            .etcd_alarm_list()
            .await?
            .into_iter()
            .map(|member_alarm| member_alarm.alarm)
            .filter(AlarmKind::is_active)
            .collect();

        Ok(self.evaluate(&EtcdSample {
            member_status,
            member_count: members.len(),
            alarms,
        }))
    }

    pub fn evaluate(&self, sample: &EtcdSample) -> Decision {
        let status = &sample.member_status;
        let db_size = status.db_size.max(0) as u64;
        let perf_data = vec![
            PerfDatum::new("etcd_dbsize", db_size as f64)
                .with_unit(Unit::Bytes)
                .with_thresholds(self.thresholds.warning, self.thresholds.critical)
                .with_min("0"),
            PerfDatum::new("etcd_dbsize_in_use", status.db_size_in_use.max(0) as f64)
                .with_unit(Unit::Bytes)
                .with_min("0"),
            PerfDatum::new("etcd_members", sample.member_count as f64).with_min("0"),
        ];
        debug!(
            member_id = status.member_id,
            leader = status.leader,
            members = sample.member_count,
            db_size,
            alarms = sample.alarms.len(),
            "etcd sample"
        );

        if status.leader == 0 {
            return Decision::critical("No leader elected").with_perf_data(perf_data);
        }

        if sample.member_count < self.min_members {
            return Decision::critical(format!(
                "Member count {} below minimum {}",
                sample.member_count, self.min_members
            ))
            .with_perf_data(perf_data);
        }

        let active: Vec<String> = sample
            .alarms
            .iter()
            .filter(|alarm| alarm.is_active())
            .map(ToString::to_string)
            .collect();
        if !active.is_empty() {
            return Decision::critical(format!("Active alarm: {}", active.join(", ")))
                .with_perf_data(perf_data);
        }

        let role = if status.member_id == status.leader {
            "Leader".to_string()
        } else {
            format!("Follower, leader {}", status.leader)
        };

        Decision::new(
            self.thresholds.classify(db_size as f64),
            format!(
                "{role}, {}/{} members, DB {}",
                sample.member_count,
                self.min_members,
                human_bytes(db_size)
            ),
        )
        .with_perf_data(perf_data)
    }
}
