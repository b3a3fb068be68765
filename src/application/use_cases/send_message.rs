use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{HttpRequest, HttpTransport};
use crate::domain::{ChatError, ChatRequest, ChatResponse, ClientConfig, RequestId, CHAT_PATH};

/// Use case for sending one message to the chat API.
///
/// Each call issues exactly one request: no retries, no queuing, no caching.
/// At most one request is outstanding per instance; an overlapping call fails
/// with [`ChatError::InFlight`] without touching the network.
pub struct SendMessageUseCase {
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
    in_flight: AtomicBool,
}

impl SendMessageUseCase {
    pub fn new(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The chat endpoint as composed from the configured base.
    pub fn target_url(&self) -> String {
        self.config.url_for(CHAT_PATH)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn execute(&self, message: &str) -> Result<ChatResponse, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::invalid_input("message must not be empty"));
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!("Refusing to send: a chat request is already in flight");
            ChatError::InFlight
        })?;

        let url = self.target_url();
        let request_id = RequestId::generate(self.config.request_id_strategy);
        let body = serde_json::to_value(
            ChatRequest::new(message).with_model(self.config.model.clone()),
        )
        .map_err(|e| ChatError::invalid_input(format!("failed to encode request: {e}")))?;

        debug!("POST {} (request id {})", url, request_id);

        let reply = self
            .transport
            .execute(HttpRequest::post_json(&url, request_id.clone(), body))
            .await
            .inspect_err(|e| warn!("Chat request {} failed: {}", request_id, e))?;

        let status = reply.status;
        let data = reply
            .into_result()
            .inspect_err(|e| warn!("Chat request {} rejected: {}", request_id, e))?;

        let response = ChatResponse::from_json(data);
        info!(
            "Chat request {} completed with {} (provider: {}, model: {})",
            request_id, status, response.provider, response.model
        );

        Ok(response)
    }
}

/// Holds the in-flight flag for the lifetime of one request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
