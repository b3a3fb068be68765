use thiserror::Error;

/// Token used when a transport failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "unknown_error";
/// Token used when a failed response has no string `detail` field.
pub const REQUEST_FAILED: &str = "request_failed";

/// Every failure of a chat or probe attempt.
///
/// The `Display` output is the single human-readable line shown to the user;
/// nothing else about the error is surfaced to the view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The server answered with a non-2xx status.
    #[error("API {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The request never produced an HTTP response (DNS, refused, timeout...).
    #[error("{0}")]
    Transport(String),

    /// Another request is still outstanding on the same client.
    #[error("request_in_flight")]
    InFlight,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChatError {
    pub fn api(status: u16, detail: Option<&str>) -> Self {
        Self::Api {
            status,
            detail: detail.unwrap_or(REQUEST_FAILED).to_string(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.is_empty() {
            Self::Transport(UNKNOWN_ERROR.to_string())
        } else {
            Self::Transport(msg)
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
