use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{ProbeKind, ServiceStatus};

use super::super::Container;

pub struct ProbeController<'a> {
    container: &'a Container,
}

impl<'a> ProbeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn health(&self, format: OutputFormat) -> Result<String> {
        self.probe(ProbeKind::Health, format).await
    }

    pub async fn ready(&self, format: OutputFormat) -> Result<String> {
        self.probe(ProbeKind::Ready, format).await
    }

    async fn probe(&self, kind: ProbeKind, format: OutputFormat) -> Result<String> {
        let use_case = self.container.probe_use_case();
        let status = use_case
            .execute(kind)
            .await
            .map_err(|e| anyhow::anyhow!("{} check failed: {}", kind.as_str(), e))?;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&status)?,
            OutputFormat::Text => self.format_status(&status),
        })
    }

    fn format_status(&self, status: &ServiceStatus) -> String {
        let verdict = if status.is_ok() { "ok" } else { "not ok" };
        let mut out = format!(
            "{} {} ({} from {})",
            status.kind.as_str(),
            verdict,
            status.status,
            status.url
        );
        for (key, value) in status.body.iter().filter(|(k, _)| k.as_str() != "ok") {
            let value = value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            out.push_str(&format!("\n  {}: {}", key, value));
        }
        out
    }
}
