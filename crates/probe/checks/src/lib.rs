//! Probe Checks - evaluation engine for Talos node checks.
//!
//! Each check fetches one metric family through [`NodeApi`] and turns it into
//! a [`probe_output::Decision`]. Business conditions never error: missing or
//! inconsistent data becomes an UNKNOWN decision, structural failures become
//! CRITICAL, and only retrieval failures surface as [`RetrievalError`].

#![deny(unsafe_code)]

pub mod check;
pub mod cpu;
pub mod disk;
pub mod error;
pub mod etcd;
pub mod load;
pub mod memory;
pub mod node;
pub mod services;
pub mod thresholds;

#[cfg(test)]
mod mock;

pub use check::Check;
pub use cpu::CpuCheck;
pub use disk::DiskCheck;
pub use error::{CheckConfigError, CheckConfigResult, RetrievalError, RetrievalResult};
pub use etcd::{EtcdCheck, EtcdSample};
pub use load::{LoadCheck, LoadPeriod};
pub use memory::MemoryCheck;
pub use node::{
    AlarmKind, CpuStat, EtcdMember, EtcdMemberAlarm, EtcdMemberStatus, EtcdStatus, LoadAvg,
    MemInfo, MountStat, NodeApi, NodeMemory, ServiceHealth, ServiceInfo, SystemStat,
};
pub use services::{ServiceFilter, ServicesCheck};
pub use thresholds::Thresholds;
