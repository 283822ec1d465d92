//! The closed set of checks.

use crate::cpu::CpuCheck;
use crate::disk::DiskCheck;
use crate::error::RetrievalResult;
use crate::etcd::EtcdCheck;
use crate::load::LoadCheck;
use crate::memory::MemoryCheck;
use crate::node::NodeApi;
use crate::services::ServicesCheck;
use probe_output::Decision;

/// A configured check, ready to run against a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Cpu(CpuCheck),
    Memory(MemoryCheck),
    Disk(DiskCheck),
    Services(ServicesCheck),
    Etcd(EtcdCheck),
    Load(LoadCheck),
}

impl Check {
    /// Uppercase name used in the status line.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Cpu(_) => CpuCheck::NAME,
            Check::Memory(_) => MemoryCheck::NAME,
            Check::Disk(_) => DiskCheck::NAME,
            Check::Services(_) => ServicesCheck::NAME,
            Check::Etcd(_) => EtcdCheck::NAME,
            Check::Load(_) => LoadCheck::NAME,
        }
    }

    /// Retrieve data and evaluate it.
    pub async fn run(&self, node: &dyn NodeApi) -> RetrievalResult<Decision> {
        match self {
            Check::Cpu(check) => check.run(node).await,
            Check::Memory(check) => check.run(node).await,
            Check::Disk(check) => check.run(node).await,
            Check::Services(check) => check.run(node).await,
            Check::Etcd(check) => check.run(node).await,
            Check::Load(check) => check.run(node).await,
        }
    }
}

impl From<CpuCheck> for Check {
    fn from(check: CpuCheck) -> Self {
        Check::Cpu(check)
    }
}

impl From<MemoryCheck> for Check {
    fn from(check: MemoryCheck) -> Self {
        Check::Memory(check)
    }
}

impl From<DiskCheck> for Check {
    fn from(check: DiskCheck) -> Self {
        Check::Disk(check)
    }
}

impl From<ServicesCheck> for Check {
    fn from(check: ServicesCheck) -> Self {
        Check::Services(check)
    }
}

impl From<EtcdCheck> for Check {
    fn from(check: EtcdCheck) -> Self {
        Check::Etcd(check)
    }
}

impl From<LoadCheck> for Check {
    fn from(check: LoadCheck) -> Self {
        Check::Load(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNode;
    use crate::node::{LoadAvg, NodeMemory};
    use crate::RetrievalError;
    use probe_output::Status;

    #[test]
    fn test_names() {
        let checks: Vec<Check> = vec![
            CpuCheck::new("80", "90").unwrap().into(),
            MemoryCheck::new("80", "90").unwrap().into(),
            DiskCheck::new("80", "90", "/var").unwrap().into(),
            ServicesCheck::default().into(),
            EtcdCheck::new("~:1", "~:2", 1).unwrap().into(),
            LoadCheck::new(None, None, "5").unwrap().into(),
        ];
        let names: Vec<&str> = checks.iter().map(Check::name).collect();
        assert_eq!(names, vec!["CPU", "MEMORY", "DISK", "SERVICES", "ETCD", "LOAD"]);
    }

    #[tokio::test]
    async fn test_dispatch() {
        let node = MockNode {
            memory: Some(Ok(Some(NodeMemory::default()))),
            load_avg: Some(Ok(Some(LoadAvg::default()))),
            ..MockNode::new()
        };

        let memory: Check = MemoryCheck::new("80", "90").unwrap().into();
        let decision = memory.run(&node).await.unwrap();
        assert_eq!(decision.status, Status::Unknown);

        let load: Check = LoadCheck::new(Some("1"), Some("2"), "1").unwrap().into();
        assert_eq!(load.run(&node).await.unwrap().status, Status::Ok);

        let cpu: Check = CpuCheck::new("80", "90").unwrap().into();
        assert!(matches!(
            cpu.run(&node).await,
            Err(RetrievalError::Unimplemented(_))
        ));
    }
}
