use std::sync::Arc;

use tracing::debug;

use crate::domain::ViewState;

use super::SendMessageUseCase;

/// Drives a [`ViewState`] through `idle -> sending -> {succeeded, failed}`.
///
/// Sending is gated on the view: a blank message or an outstanding request
/// means no request is issued at all.
pub struct ChatSession {
    use_case: Arc<SendMessageUseCase>,
    view: ViewState,
}

impl ChatSession {
    pub fn new(use_case: Arc<SendMessageUseCase>, message: impl Into<String>) -> Self {
        Self {
            use_case,
            view: ViewState::new(message),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.view.set_message(message);
    }

    pub fn api_base(&self) -> &str {
        &self.use_case.config().api_base
    }

    pub fn target_url(&self) -> String {
        self.use_case.target_url()
    }

    /// Send the current message. Returns `false` when the send action is
    /// disabled and nothing was issued.
    pub async fn submit(&mut self) -> bool {
        if !self.view.can_send() {
            debug!("Send skipped: message is blank or a request is loading");
            return false;
        }

        self.view.begin();
        let message = self.view.message().to_string();
        match self.use_case.execute(&message).await {
            Ok(response) => self.view.succeed(response),
            Err(e) => self.view.fail(e.to_string()),
        }
        true
    }
}
