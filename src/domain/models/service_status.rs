use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const HEALTH_PATH: &str = "/healthz";
pub const READY_PATH: &str = "/readyz";

/// Which backend probe to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Health,
    Ready,
}

impl ProbeKind {
    pub fn path(&self) -> &'static str {
        match self {
            ProbeKind::Health => HEALTH_PATH,
            ProbeKind::Ready => READY_PATH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Health => "health",
            ProbeKind::Ready => "ready",
        }
    }
}

/// Outcome of a successful liveness or readiness probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub kind: ProbeKind,
    pub status: u16,
    pub url: String,
    pub body: Map<String, Value>,
}

impl ServiceStatus {
    pub fn new(kind: ProbeKind, status: u16, url: String, body: Value) -> Self {
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            kind,
            status,
            url,
            body,
        }
    }

    /// The backend's own `ok` flag; absent counts as not ok.
    pub fn is_ok(&self) -> bool {
        self.body.get("ok").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_ok_flag_and_fields() {
        let status = ServiceStatus::new(
            ProbeKind::Ready,
            200,
            "/readyz".into(),
            json!({"ok": true, "provider": "ollama", "ollama_version": "0.5.1"}),
        );
        assert!(status.is_ok());
        assert_eq!(status.field("provider"), Some("ollama"));
        assert_eq!(status.field("missing"), None);
    }

    #[test]
    fn non_object_body_is_empty() {
        let status = ServiceStatus::new(ProbeKind::Health, 200, "/healthz".into(), json!("up"));
        assert!(status.body.is_empty());
        assert!(!status.is_ok());
    }
}
