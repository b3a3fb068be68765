use serde::{Deserialize, Serialize};

use super::ChatResponse;

/// Where the last send attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendPhase {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Transient state behind the chat surface.
///
/// `response` and `error` are never both set: every transition clears the
/// other outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    message: String,
    loading: bool,
    response: Option<ChatResponse>,
    error: Option<String>,
}

impl ViewState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn response(&self) -> Option<&ChatResponse> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The send action is enabled only when idle and the trimmed message is non-empty.
    pub fn can_send(&self) -> bool {
        !self.loading && !self.message.trim().is_empty()
    }

    pub fn phase(&self) -> SendPhase {
        match (self.loading, &self.response, &self.error) {
            (true, _, _) => SendPhase::Sending,
            (false, Some(_), _) => SendPhase::Succeeded,
            (false, None, Some(_)) => SendPhase::Failed,
            (false, None, None) => SendPhase::Idle,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.response = None;
    }

    pub fn succeed(&mut self, response: ChatResponse) {
        self.loading = false;
        self.error = None;
        self.response = Some(response);
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.response = None;
        self.error = Some(error.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(reply: &str) -> ChatResponse {
        ChatResponse {
            reply: reply.to_string(),
            ..ChatResponse::default()
        }
    }

    #[test]
    fn starts_idle() {
        let view = ViewState::new("Hello");
        assert_eq!(view.phase(), SendPhase::Idle);
        assert!(view.can_send());
    }

    #[test]
    fn blank_message_disables_send() {
        assert!(!ViewState::new("").can_send());
        assert!(!ViewState::new("   \n\t").can_send());
    }

    #[test]
    fn loading_disables_send() {
        let mut view = ViewState::new("hi");
        view.begin();
        assert!(!view.can_send());
        assert_eq!(view.phase(), SendPhase::Sending);
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut view = ViewState::new("hi");
        view.begin();
        view.succeed(response("one"));
        view.begin();
        assert!(view.response().is_none());
        assert!(view.error().is_none());
        assert!(view.loading());
    }

    #[test]
    fn outcomes_are_mutually_exclusive() {
        let mut view = ViewState::new("hi");
        view.begin();
        view.fail("timeout");
        assert_eq!(view.phase(), SendPhase::Failed);
        assert!(view.response().is_none());

        view.begin();
        view.succeed(response("ok"));
        assert_eq!(view.phase(), SendPhase::Succeeded);
        assert!(view.error().is_none());
        assert_eq!(view.response().map(|r| r.reply.as_str()), Some("ok"));

        view.fail("API 500: request_failed");
        assert!(view.response().is_none());
        assert_eq!(view.error(), Some("API 500: request_failed"));
        assert!(!view.loading());
    }
}
