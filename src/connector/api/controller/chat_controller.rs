use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::ChatSession;
use crate::cli::OutputFormat;
use crate::domain::ChatResponse;

use super::super::Container;

const EXIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Send a single message. A failed attempt is returned as an error so the
    /// process exits non-zero, still carrying the rendered view.
    pub async fn send(&self, message: String, format: OutputFormat) -> Result<String> {
        let mut session = self.container.chat_session(message);
        if !session.view().can_send() {
            anyhow::bail!("Nothing to send: message is empty");
        }

        self.submit(&mut session, format).await;

        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.view_json(&session))?,
            OutputFormat::Text => format!(
                "{}\n\n{}",
                self.format_header(&session),
                self.format_outcome(&session)
            ),
        };

        if session.view().error().is_some() {
            anyhow::bail!(rendered);
        }
        Ok(rendered)
    }

    /// Line-oriented chat on stdin. Every non-blank line is one independent
    /// request; blank lines are skipped without sending.
    pub async fn interactive(&self, format: OutputFormat) -> Result<String> {
        let mut session = self.container.chat_session(String::new());
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if format == OutputFormat::Text {
            let header = format!(
                "{}\nType a message and press Enter. {} to leave.\n",
                self.format_header(&session),
                EXIT_COMMANDS.join(" or ")
            );
            stdout.write_all(header.as_bytes()).await?;
        }

        let mut sent = 0usize;
        loop {
            if format == OutputFormat::Text {
                stdout.write_all(b"> ").await?;
                stdout.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if EXIT_COMMANDS.contains(&line.trim()) {
                break;
            }

            session.set_message(line);
            if !self.submit(&mut session, format).await {
                continue;
            }
            sent += 1;

            let out = match format {
                OutputFormat::Json => serde_json::to_string(&self.view_json(&session))?,
                OutputFormat::Text => self.format_outcome(&session),
            };
            stdout.write_all(format!("{out}\n\n").as_bytes()).await?;
            stdout.flush().await?;
        }

        Ok(format!("Bye. {} message(s) sent.", sent))
    }

    async fn submit(&self, session: &mut ChatSession, format: OutputFormat) -> bool {
        let spinner = (format == OutputFormat::Text).then(sending_spinner);
        let issued = session.submit().await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        issued
    }

    fn view_json(&self, session: &ChatSession) -> Value {
        let view = session.view();
        json!({
            "api_base": session.api_base(),
            "url": session.target_url(),
            "phase": view.phase(),
            "message": view.message(),
            "response": view.response(),
            "error": view.error(),
        })
    }

    fn format_header(&self, session: &ChatSession) -> String {
        let target = session.target_url();
        let resolved = self.container.resolved_url(&target);
        let mut out = format!("API Base: {}\nCalls: {}", session.api_base(), target);
        if resolved != target {
            out.push_str(&format!(" ({})", resolved));
        }
        if self.container.is_mock() {
            out.push_str("\nBackend: mock");
        }
        out
    }

    fn format_outcome(&self, session: &ChatSession) -> String {
        let view = session.view();
        if let Some(error) = view.error() {
            return format!("Error: {}", error);
        }
        match view.response() {
            Some(resp) => format_reply(resp),
            None => String::new(),
        }
    }
}

fn format_reply(resp: &ChatResponse) -> String {
    let mut out = format!(
        "Reply\n{}\n\nProvider: {} | Model: {} | Request ID: {}",
        resp.reply, resp.provider, resp.model, resp.request_id
    );

    if let Some(metrics) = resp.metrics.as_ref().filter(|m| !m.is_empty()) {
        let rendered: Vec<String> = metrics
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if !rendered.is_empty() {
            out.push_str(&format!("\nMetrics: {}", rendered.join(", ")));
        }
    }

    out
}

fn sending_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Sending...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
