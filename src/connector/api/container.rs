use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatSession, HttpTransport, ProbeServiceUseCase, SendMessageUseCase};
use crate::domain::{resolve_url, ClientConfig};
use crate::{MockTransport, ReqwestTransport};

pub struct ContainerConfig {
    pub client: ClientConfig,
    /// Answer locally with the mock provider instead of calling the API.
    pub mock: bool,
}

pub struct Container {
    transport: Arc<dyn HttpTransport>,
    send_use_case: Arc<SendMessageUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let transport: Arc<dyn HttpTransport> = if config.mock {
            debug!("Using mock chat backend");
            Arc::new(MockTransport::new())
        } else {
            debug!(
                "Using HTTP transport (api base: '{}', origin: {})",
                config.client.api_base, config.client.origin
            );
            Arc::new(ReqwestTransport::from_config(&config.client))
        };

        Self::with_transport(transport, config)
    }

    /// Build a container around an existing transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: ContainerConfig) -> Self {
        let send_use_case = Arc::new(SendMessageUseCase::new(
            Arc::clone(&transport),
            config.client.clone(),
        ));

        Self {
            transport,
            send_use_case,
            config,
        }
    }

    pub fn client_config(&self) -> &ClientConfig {
        &self.config.client
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }

    pub fn send_use_case(&self) -> Arc<SendMessageUseCase> {
        Arc::clone(&self.send_use_case)
    }

    pub fn chat_session(&self, message: impl Into<String>) -> ChatSession {
        ChatSession::new(self.send_use_case(), message)
    }

    pub fn probe_use_case(&self) -> ProbeServiceUseCase {
        ProbeServiceUseCase::new(Arc::clone(&self.transport), self.config.client.clone())
    }

    /// Absolute URL a (possibly relative) API URL is sent to.
    pub fn resolved_url(&self, url: &str) -> String {
        if self.config.mock {
            return url.to_string();
        }
        resolve_url(&self.config.client.origin, url)
    }
}
