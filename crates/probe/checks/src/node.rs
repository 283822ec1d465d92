//! Node API seam.
//!
//! Checks never talk to the transport directly; they go through [`NodeApi`],
//! which returns already-decoded samples. A multi-node response is reduced to
//! the first node's message: `None` means the node answered with no messages.

use crate::error::RetrievalResult;
use async_trait::async_trait;

/// Aggregate CPU time counters, in the units the kernel reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CpuStat {
    pub user: f64,
    pub nice: f64,
    pub system: f64,
    pub idle: f64,
    pub iowait: f64,
    pub irq: f64,
    pub soft_irq: f64,
    pub steal: f64,
}

impl CpuStat {
    /// Sum of all counters.
    pub fn total(&self) -> f64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.soft_irq
            + self.steal
    }

    /// Time spent neither idle nor waiting on I/O.
    pub fn active(&self) -> f64 {
        self.total() - self.idle - self.iowait
    }
}

/// System statistics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemStat {
    /// Aggregate counters across all CPUs.
    pub cpu_total: Option<CpuStat>,
    /// Number of per-CPU entries reported.
    pub cpu_count: usize,
}

/// `/proc/meminfo` figures, in kibibytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemInfo {
    pub mem_total_kib: u64,
    pub mem_available_kib: u64,
}

/// Memory response for one node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeMemory {
    pub meminfo: Option<MemInfo>,
}

/// Capacity of one mounted filesystem, in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountStat {
    pub size: u64,
    pub available: u64,
    pub mounted_on: String,
}

/// Health probe result of a system service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceHealth {
    pub unknown: bool,
    pub healthy: bool,
    pub last_message: String,
}

/// A Talos system service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceInfo {
    pub id: String,
    pub state: String,
    pub health: Option<ServiceHealth>,
}

/// Status of the local etcd member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EtcdMemberStatus {
    pub member_id: u64,
    /// Zero when no leader is known.
    pub leader: u64,
    pub db_size: i64,
    pub db_size_in_use: i64,
}

/// Etcd status response for one node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EtcdStatus {
    pub member_status: Option<EtcdMemberStatus>,
}

/// A member of the etcd cluster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EtcdMember {
    pub id: u64,
}

/// Etcd alarm type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmKind {
    #[default]
    None,
    NoSpace,
    Corrupt,
    /// A value this build does not know by name.
    Other(i32),
}

impl AlarmKind {
    /// Map the wire value.
    pub fn from_wire(value: i32) -> Self {
        match value {
            0 => AlarmKind::None,
            1 => AlarmKind::NoSpace,
            2 => AlarmKind::Corrupt,
            other => AlarmKind::Other(other),
        }
    }

    /// Whether this is an actual alarm.
    pub fn is_active(&self) -> bool {
        !matches!(self, AlarmKind::None)
    }
}

impl std::fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlarmKind::None => write!(f, "NONE"),
            AlarmKind::NoSpace => write!(f, "NOSPACE"),
            AlarmKind::Corrupt => write!(f, "CORRUPT"),
            AlarmKind::Other(value) => write!(f, "{value}"),
        }
    }
}

/// An alarm raised on an etcd member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EtcdMemberAlarm {
    pub alarm: AlarmKind,
}

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadAvg {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Read-only access to a node's management API.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// CPU counters and per-CPU list.
    async fn system_stat(&self) -> RetrievalResult<Option<SystemStat>>;

    /// Memory statistics.
    async fn memory(&self) -> RetrievalResult<Option<NodeMemory>>;

    /// Mounted filesystems.
    async fn mounts(&self) -> RetrievalResult<Option<Vec<MountStat>>>;

    /// System services.
    async fn service_list(&self) -> RetrievalResult<Option<Vec<ServiceInfo>>>;

    /// Local etcd member status.
    async fn etcd_status(&self) -> RetrievalResult<Option<EtcdStatus>>;

    /// Etcd cluster membership.
    async fn etcd_member_list(&self) -> RetrievalResult<Option<Vec<EtcdMember>>>;

    /// Alarms across all responding nodes.
    async fn etcd_alarm_list(&self) -> RetrievalResult<Vec<EtcdMemberAlarm>>;

    /// Load averages.
    async fn load_avg(&self) -> RetrievalResult<Option<LoadAvg>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_totals() {
        let stat = CpuStat {
            user: 200.0,
            nice: 10.0,
            system: 100.0,
            idle: 600.0,
            iowait: 58.0,
            irq: 20.0,
            soft_irq: 10.0,
            steal: 2.0,
        };
        assert_eq!(stat.total(), 1000.0);
        assert_eq!(stat.active(), 342.0);
    }

    #[test]
    fn test_alarm_kind() {
        assert_eq!(AlarmKind::from_wire(0), AlarmKind::None);
        assert_eq!(AlarmKind::from_wire(1).to_string(), "NOSPACE");
        assert_eq!(AlarmKind::from_wire(2).to_string(), "CORRUPT");
        assert_eq!(AlarmKind::from_wire(7).to_string(), "7");
        assert!(!AlarmKind::None.is_active());
        assert!(AlarmKind::Other(7).is_active());
    }
}
