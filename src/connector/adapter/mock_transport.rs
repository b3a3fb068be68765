use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::application::{HttpMethod, HttpReply, HttpRequest, HttpTransport};
use crate::domain::{ChatError, HEALTH_PATH, READY_PATH};

const DEFAULT_MODEL: &str = "llama3.2:3b";

/// Offline stand-in for the chat backend's mock provider.
///
/// Echoes chat messages as `[mock] You said: <message>` and reports itself
/// healthy and ready. Unknown paths get a 404 with a `detail`.
pub struct MockTransport {
    model: String,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }

    fn chat_reply(&self, request: &HttpRequest) -> HttpReply {
        let body = request.body.as_ref();
        let message = body
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        if message.is_empty() {
            return HttpReply::json(400, &json!({"detail": "Provide either 'messages' or 'message'"}));
        }
        let model = body
            .and_then(|b| b.get("model"))
            .and_then(Value::as_str)
            .unwrap_or(self.model.as_str());

        HttpReply::json(
            200,
            &json!({
                "reply": format!("[mock] You said: {message}"),
                "model": model,
                "provider": "mock",
                "request_id": request.request_id.as_str(),
                "metrics": null
            }),
        )
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Path component of a relative or absolute URL.
fn path_of(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match without_scheme {
        Some(rest) => rest.find('/').map(|i| &rest[i..]).unwrap_or("/"),
        None => url,
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply, ChatError> {
        let path = path_of(&request.url);
        debug!("MockTransport: {} {}", request.method.as_str(), path);

        let reply = match (request.method, path) {
            (HttpMethod::Post, p) if p.ends_with("/api/chat") => self.chat_reply(&request),
            (HttpMethod::Get, p) if p.ends_with(HEALTH_PATH) => {
                HttpReply::json(200, &json!({"ok": true, "service": "mock"}))
            }
            (HttpMethod::Get, p) if p.ends_with(READY_PATH) => {
                HttpReply::json(200, &json!({"ok": true, "provider": "mock"}))
            }
            _ => HttpReply::json(404, &json!({"detail": "Not Found"})),
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RequestId, RequestIdStrategy};

    fn id() -> RequestId {
        RequestId::generate(RequestIdStrategy::Uuid)
    }

    #[test]
    fn extracts_path_from_urls() {
        assert_eq!(path_of("/api/chat"), "/api/chat");
        assert_eq!(path_of("http://h:8000/api/chat"), "/api/chat");
        assert_eq!(path_of("https://h"), "/");
    }

    #[tokio::test]
    async fn echoes_chat_messages() {
        let transport = MockTransport::new();
        let request_id = id();
        let reply = transport
            .execute(HttpRequest::post_json("/api/chat", request_id.clone(), json!({"message": "hello"})))
            .await
            .unwrap();
        let body = reply.into_result().unwrap();
        assert_eq!(body["reply"], "[mock] You said: hello");
        assert_eq!(body["provider"], "mock");
        assert_eq!(body["request_id"], request_id.as_str());
    }

    #[tokio::test]
    async fn honours_model_override() {
        let reply = MockTransport::new()
            .execute(HttpRequest::post_json(
                "http://h/api/chat",
                id(),
                json!({"message": "x", "model": "qwen"}),
            ))
            .await
            .unwrap();
        assert_eq!(reply.into_result().unwrap()["model"], "qwen");
    }

    #[tokio::test]
    async fn unknown_paths_are_404() {
        let reply = MockTransport::new()
            .execute(HttpRequest::get("/nope", id()))
            .await
            .unwrap();
        assert_eq!(reply.into_result().unwrap_err().to_string(), "API 404: Not Found");
    }
}
