use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Path of the chat endpoint, relative to the configured API base.
pub const CHAT_PATH: &str = "/api/chat";

/// Body of `POST /api/chat`.
///
/// `model` is omitted from the JSON when unset so the default body is exactly
/// `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

/// Reply of a successful `POST /api/chat`.
///
/// The server owns this shape and it is passed through without validation:
/// absent fields default to empty strings and unknown fields land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub reply: String,
    pub model: String,
    pub provider: String,
    pub request_id: String,
    pub metrics: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatResponse {
    /// Build a response from whatever JSON the server sent.
    ///
    /// Each field is read on its own: a null or oddly typed field is left
    /// empty without affecting the others. A non-object body yields an empty
    /// response rather than an error.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let mut text = |key: &str| map.remove(key).map(scalar_text).unwrap_or_default();
        let reply = text("reply");
        let model = text("model");
        let provider = text("provider");
        let request_id = text("request_id");
        let metrics = match map.remove("metrics") {
            Some(Value::Object(metrics)) => Some(metrics),
            _ => None,
        };

        Self {
            reply,
            model,
            provider,
            request_id,
            metrics,
            extra: map,
        }
    }

    pub fn metric(&self, key: &str) -> Option<&Value> {
        self.metrics.as_ref().and_then(|m| m.get(key))
    }
}

/// Display text of a scalar JSON value; null, arrays and objects are empty.
fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
