//! Talos machine API client.

use crate::config::{ConnectionConfig, Credentials};
use crate::convert;
use crate::endpoint::server_name;
use crate::error::{classify_status, ClientError, ClientResult};
use crate::pb::machine::machine_service_client::MachineServiceClient;
use crate::pb::machine::EtcdMemberListRequest;
use async_trait::async_trait;
use probe_checks::{
    EtcdMember, EtcdMemberAlarm, EtcdStatus, LoadAvg, MountStat, NodeApi, NodeMemory,
    RetrievalError, RetrievalResult, ServiceInfo, SystemStat,
};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Identity};
use tonic::{Request, Response, Status};
use tracing::{debug, instrument};

/// Metadata key apid uses to proxy a call to another node.
pub const NODE_METADATA_KEY: &str = "node";

/// Per-invocation request settings.
#[derive(Debug, Clone)]
struct CallContext {
    node: Option<MetadataValue<Ascii>>,
    deadline: Instant,
}

impl CallContext {
    fn new(node: Option<&str>, timeout: Duration) -> ClientResult<Self> {
        let node = node
            .map(|node| {
                node.parse::<MetadataValue<Ascii>>()
                    .map_err(|_| ClientError::InvalidNode(node.to_string()))
            })
            .transpose()?;
        Ok(Self {
            node,
            deadline: Instant::now() + timeout,
        })
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    fn request<M>(&self, message: M) -> Request<M> {
        let mut request = Request::new(message);
        request.set_timeout(self.remaining());
        if let Some(node) = &self.node {
            request
                .metadata_mut()
                .insert(NODE_METADATA_KEY, node.clone());
        }
        request
    }

    async fn within<T>(
        &self,
        call: impl Future<Output = Result<Response<T>, Status>>,
    ) -> RetrievalResult<T> {
        match tokio::time::timeout_at(self.deadline, call).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => {
                debug!(code = ?status.code(), message = status.message(), "rpc failed");
                Err(classify_status(&status))
            }
            Err(_) => Err(RetrievalError::DeadlineExceeded(
                "deadline exceeded".to_string(),
            )),
        }
    }
}

/// mTLS client for one Talos endpoint.
///
/// The channel connects on first use, so an unreachable endpoint shows up as
/// a retrieval error rather than a setup error.
#[derive(Debug, Clone)]
pub struct TalosClient {
    inner: MachineServiceClient<Channel>,
    context: CallContext,
}

impl TalosClient {
    /// Resolve credentials and prepare the channel.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn connect(config: &ConnectionConfig) -> ClientResult<Self> {
        let credentials = config.resolve()?;
        Self::with_credentials(&credentials, config.node(), config.timeout)
    }

    /// Prepare the channel from already-loaded credentials.
    pub fn with_credentials(
        credentials: &Credentials,
        node: Option<&str>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let context = CallContext::new(node, timeout)?;

        let tls = ClientTlsConfig::new()
            .domain_name(server_name(&credentials.uri))
            .ca_certificate(Certificate::from_pem(&credentials.ca))
            .identity(Identity::from_pem(&credentials.cert, &credentials.key));

        let channel = Channel::from_shared(credentials.uri.clone())
            .map_err(|err| ClientError::InvalidEndpoint {
                endpoint: credentials.uri.clone(),
                reason: err.to_string(),
            })?
            .tls_config(tls)?
            .connect_timeout(timeout)
            .connect_lazy();

        debug!(uri = %credentials.uri, node = ?node, ?timeout, "talos client ready");

        Ok(Self {
            inner: MachineServiceClient::new(channel),
            context,
        })
    }

    /// Time left before the invocation deadline.
    pub fn remaining(&self) -> Duration {
        self.context.remaining()
    }
}

#[async_trait]
impl NodeApi for TalosClient {
    #[instrument(skip(self))]
    async fn system_stat(&self) -> RetrievalResult<Option<SystemStat>> {
        let mut client = self.inner.clone();
        let call = client.system_stat(self.context.request(()));
        Ok(convert::system_stat(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn memory(&self) -> RetrievalResult<Option<NodeMemory>> {
        let mut client = self.inner.clone();
        let call = client.memory(self.context.request(()));
        Ok(convert::memory(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn mounts(&self) -> RetrievalResult<Option<Vec<MountStat>>> {
        let mut client = self.inner.clone();
        let call = client.mounts(self.context.request(()));
        Ok(convert::mounts(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn service_list(&self) -> RetrievalResult<Option<Vec<ServiceInfo>>> {
        let mut client = self.inner.clone();
        let call = client.service_list(self.context.request(()));
        Ok(convert::service_list(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn etcd_status(&self) -> RetrievalResult<Option<EtcdStatus>> {
        let mut client = self.inner.clone();
        let call = client.etcd_status(self.context.request(()));
        Ok(convert::etcd_status(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn etcd_member_list(&self) -> RetrievalResult<Option<Vec<EtcdMember>>> {
        let mut client = self.inner.clone();
        let request = self.context.request(EtcdMemberListRequest::default());
        let call = client.etcd_member_list(request);
        Ok(convert::etcd_member_list(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn etcd_alarm_list(&self) -> RetrievalResult<Vec<EtcdMemberAlarm>> {
        let mut client = self.inner.clone();
        let call = client.etcd_alarm_list(self.context.request(()));
        Ok(convert::etcd_alarm_list(self.context.within(call).await?))
    }

    #[instrument(skip(self))]
    async fn load_avg(&self) -> RetrievalResult<Option<LoadAvg>> {
        let mut client = self.inner.clone();
        let call = client.load_avg(self.context.request(()));
        Ok(convert::load_avg(self.context.within(call).await?))
    }
}
