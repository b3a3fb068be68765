use std::time::Duration;

use super::RequestIdStrategy;
use crate::domain::compose_url;

pub const API_BASE_ENV: &str = "OSSCHAT_API_BASE_URL";
pub const ORIGIN_ENV: &str = "OSSCHAT_ORIGIN";
pub const MODEL_ENV: &str = "OSSCHAT_MODEL";
/// Where relative URLs are sent when no API base is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Settings for talking to the chat API.
///
/// Built once at startup and handed to the client; the client itself never
/// reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means relative requests.
    pub api_base: String,
    /// Origin that relative requests are resolved against.
    pub origin: String,
    pub request_id_strategy: RequestIdStrategy,
    pub timeout: Option<Duration>,
    /// Optional model override forwarded with chat requests.
    pub model: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            origin: DEFAULT_ORIGIN.to_string(),
            request_id_strategy: RequestIdStrategy::default(),
            timeout: None,
            model: None,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the environment:
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `OSSCHAT_API_BASE_URL` | `""` (relative paths)   |
    /// | `OSSCHAT_ORIGIN`       | `http://localhost:8000` |
    /// | `OSSCHAT_MODEL`        | unset (server default)  |
    pub fn from_env() -> Self {
        let api_base = std::env::var(API_BASE_ENV).unwrap_or_default();
        let origin = std::env::var(ORIGIN_ENV)
            .ok()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let model = std::env::var(MODEL_ENV).ok().filter(|m| !m.trim().is_empty());
        Self {
            api_base,
            origin,
            model,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_request_id_strategy(mut self, strategy: RequestIdStrategy) -> Self {
        self.request_id_strategy = strategy;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// URL for `path` as it is shown to the user (possibly relative).
    pub fn url_for(&self, path: &str) -> String {
        compose_url(&self.api_base, path)
    }
}
