//! Wire messages to check samples.
//!
//! Responses carry one message per node; only the first is used, except for
//! alarms which are collected across every message.

use crate::pb::machine as pb;
use probe_checks::{
    AlarmKind, CpuStat, EtcdMember, EtcdMemberAlarm, EtcdMemberStatus, EtcdStatus, LoadAvg,
    MemInfo, MountStat, NodeMemory, ServiceHealth, ServiceInfo, SystemStat,
};
use tracing::debug;

fn note_metadata(rpc: &str, metadata: Option<&pb::Metadata>) {
    if let Some(metadata) = metadata {
        if !metadata.error.is_empty() {
            debug!(rpc, hostname = %metadata.hostname, error = %metadata.error, "node reported error");
        }
    }
}

fn cpu_stat(stat: &pb::CpuStat) -> CpuStat {
    CpuStat {
        user: stat.user,
        nice: stat.nice,
        system: stat.system,
        idle: stat.idle,
        iowait: stat.iowait,
        irq: stat.irq,
        soft_irq: stat.soft_irq,
        steal: stat.steal,
    }
}

pub fn system_stat(response: pb::SystemStatResponse) -> Option<SystemStat> {
    let message = response.messages.into_iter().next()?;
    note_metadata("SystemStat", message.metadata.as_ref());
    Some(SystemStat {
        cpu_total: message.cpu_total.as_ref().map(cpu_stat),
        cpu_count: message.cpu.len(),
    })
}

pub fn memory(response: pb::MemoryResponse) -> Option<NodeMemory> {
    let message = response.messages.into_iter().next()?;
    note_metadata("Memory", message.metadata.as_ref());
    Some(NodeMemory {
        meminfo: message.meminfo.map(|info| MemInfo {
            mem_total_kib: info.memtotal,
            mem_available_kib: info.memavailable,
        }),
    })
}

pub fn mounts(response: pb::MountsResponse) -> Option<Vec<MountStat>> {
    let message = response.messages.into_iter().next()?;
    note_metadata("Mounts", message.metadata.as_ref());
    Some(
        message
            .stats
            .into_iter()
            .map(|stat| MountStat {
                size: stat.size,
                available: stat.available,
                mounted_on: stat.mounted_on,
            })
            .collect(),
    )
}

pub fn service_list(response: pb::ServiceListResponse) -> Option<Vec<ServiceInfo>> {
    let message = response.messages.into_iter().next()?;
    note_metadata("ServiceList", message.metadata.as_ref());
    Some(
        message
            .services
            .into_iter()
            .map(|service| ServiceInfo {
                id: service.id,
                state: service.state,
                health: service.health.map(|health| ServiceHealth {
                    unknown: health.unknown,
                    healthy: health.healthy,
                    last_message: health.last_message,
                }),
            })
            .collect(),
    )
}

pub fn etcd_status(response: pb::EtcdStatusResponse) -> Option<EtcdStatus> {
    let message = response.messages.into_iter().next()?;
    note_metadata("EtcdStatus", message.metadata.as_ref());
    Some(EtcdStatus {
        member_status: message.member_status.map(|status| EtcdMemberStatus {
            member_id: status.member_id,
            leader: status.leader,
            db_size: status.db_size,
            db_size_in_use: status.db_size_in_use,
        }),
    })
}

pub fn etcd_member_list(response: pb::EtcdMemberListResponse) -> Option<Vec<EtcdMember>> {
    let message = response.messages.into_iter().next()?;
    note_metadata("EtcdMemberList", message.metadata.as_ref());
    Some(
        message
            .members
            .into_iter()
            .map(|member| EtcdMember { id: member.id })
            .collect(),
    )
}

pub fn etcd_alarm_list(response: pb::EtcdAlarmListResponse) -> Vec<EtcdMemberAlarm> {
    response
        .messages
        .into_iter()
        .flat_map(|message| {
            note_metadata("EtcdAlarmList", message.metadata.as_ref());
            message.member_alarms
        })
        .map(|alarm| EtcdMemberAlarm {
            alarm: AlarmKind::from_wire(alarm.alarm),
        })
        .collect()
}

pub fn load_avg(response: pb::LoadAvgResponse) -> Option<LoadAvg> {
    let message = response.messages.into_iter().next()?;
    note_metadata("LoadAvg", message.metadata.as_ref());
    Some(LoadAvg {
        load1: message.load1,
        load5: message.load5,
        load15: message.load15,
    })
}
