use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::{ChatError, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A single outbound call. `url` may be relative; resolving it is the
/// transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub request_id: RequestId,
    /// JSON body; when present it is sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            request_id,
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, request_id: RequestId, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            request_id,
            body: Some(body),
        }
    }
}

/// Raw status and body of a response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, falling back to `{}` when it is not JSON.
    pub fn json_or_empty(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|_| json!({}))
    }

    /// Map the reply to its parsed body, or to `API <status>: <detail>` when
    /// the status is not 2xx. `detail` is only honoured when it is a string.
    pub fn into_result(self) -> Result<Value, ChatError> {
        let data = self.json_or_empty();
        if !self.is_success() {
            let detail = data.get("detail").and_then(Value::as_str);
            return Err(ChatError::api(self.status, detail));
        }
        Ok(data)
    }
}

/// Sends one HTTP request and returns whatever the server answered.
///
/// Implementations must report any non-2xx status as an `Ok` reply; only
/// failures that never produced a response come back as
/// [`ChatError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply, ChatError>;
}
