use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{HttpRequest, HttpTransport};
use crate::domain::{ChatError, ClientConfig, ProbeKind, RequestId, ServiceStatus};

/// Use case for the backend's liveness (`/healthz`) and readiness (`/readyz`) probes.
pub struct ProbeServiceUseCase {
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
}

impl ProbeServiceUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub async fn health(&self) -> Result<ServiceStatus, ChatError> {
        self.execute(ProbeKind::Health).await
    }

    pub async fn ready(&self) -> Result<ServiceStatus, ChatError> {
        self.execute(ProbeKind::Ready).await
    }

    pub async fn execute(&self, kind: ProbeKind) -> Result<ServiceStatus, ChatError> {
        let url = self.config.url_for(kind.path());
        let request_id = RequestId::generate(self.config.request_id_strategy);

        debug!("GET {} (request id {})", url, request_id);

        let reply = self
            .transport
            .execute(HttpRequest::get(&url, request_id))
            .await?;
        let status = reply.status;
        let body = reply
            .into_result()
            .inspect_err(|e| warn!("{} probe failed: {}", kind.as_str(), e))?;

        Ok(ServiceStatus::new(kind, status, url, body))
    }
}
