//! Scripted [`NodeApi`] for tests.

use crate::error::{RetrievalError, RetrievalResult};
use crate::node::{
    EtcdMember, EtcdMemberAlarm, EtcdStatus, LoadAvg, MountStat, NodeApi, NodeMemory,
    ServiceInfo, SystemStat,
};
use async_trait::async_trait;
use std::sync::Mutex;

type Reply<T> = Option<RetrievalResult<T>>;

/// A node whose answers are set up front.
///
/// Calls that were not scripted fail with [`RetrievalError::Unimplemented`].
#[derive(Default)]
pub struct MockNode {
    pub system_stat: Reply<Option<SystemStat>>,
    pub memory: Reply<Option<NodeMemory>>,
    pub mounts: Reply<Option<Vec<MountStat>>>,
    pub service_list: Reply<Option<Vec<ServiceInfo>>>,
    pub etcd_status: Reply<Option<EtcdStatus>>,
    pub etcd_member_list: Reply<Option<Vec<EtcdMember>>>,
    pub etcd_alarm_list: Reply<Vec<EtcdMemberAlarm>>,
    pub load_avg: Reply<Option<LoadAvg>>,
    pub(crate) calls: Mutex<Vec<&'static str>>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the calls made so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn answer<T: Clone>(&self, name: &'static str, reply: &Reply<T>) -> RetrievalResult<T> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(name);
        }
        reply
            .clone()
            .unwrap_or_else(|| Err(RetrievalError::Unimplemented(format!("{name} not scripted"))))
    }
}

#[async_trait]
impl NodeApi for MockNode {
    async fn system_stat(&self) -> RetrievalResult<Option<SystemStat>> {
        self.answer("system_stat", &self.system_stat)
    }

    async fn memory(&self) -> RetrievalResult<Option<NodeMemory>> {
        self.answer("memory", &self.memory)
    }

    async fn mounts(&self) -> RetrievalResult<Option<Vec<MountStat>>> {
        self.answer("mounts", &self.mounts)
    }

    async fn service_list(&self) -> RetrievalResult<Option<Vec<ServiceInfo>>> {
        self.answer("service_list", &self.service_list)
    }

    async fn etcd_status(&self) -> RetrievalResult<Option<EtcdStatus>> {
        self.answer("etcd_status", &self.etcd_status)
    }

    async fn etcd_member_list(&self) -> RetrievalResult<Option<Vec<EtcdMember>>> {
        self.answer("etcd_member_list", &self.etcd_member_list)
    }

    async fn etcd_alarm_list(&self) -> RetrievalResult<Vec<EtcdMemberAlarm>> {
        self.answer("etcd_alarm_list", &self.etcd_alarm_list)
    }

    async fn load_avg(&self) -> RetrievalResult<Option<LoadAvg>> {
        self.answer("load_avg", &self.load_avg)
    }
}
