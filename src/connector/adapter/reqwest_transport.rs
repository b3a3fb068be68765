use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::application::{HttpMethod, HttpReply, HttpRequest, HttpTransport};
use crate::domain::{resolve_url, ChatError, ClientConfig, REQUEST_ID_HEADER};

/// [`HttpTransport`] backed by `reqwest`.
///
/// Relative URLs (an empty API base) are resolved against `origin`, which
/// stands in for the page origin a browser would use. No timeout is applied
/// unless one is configured.
pub struct ReqwestTransport {
    client: reqwest::Client,
    origin: String,
}

impl ReqwestTransport {
    pub fn new(origin: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            client: builder.build().unwrap_or_default(),
            origin: origin.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.origin.clone(), config.timeout)
    }

    /// Absolute URL a request for `url` is actually sent to.
    pub fn resolve(&self, url: &str) -> String {
        resolve_url(&self.origin, url)
    }

    /// Flatten a reqwest error and its sources into one line.
    fn describe(err: &reqwest::Error) -> String {
        let mut msg = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_msg = cause.to_string();
            if !msg.contains(&cause_msg) {
                msg.push_str(": ");
                msg.push_str(&cause_msg);
            }
            source = cause.source();
        }
        msg
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpReply, ChatError> {
        let url = self.resolve(&request.url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        }
        .header(REQUEST_ID_HEADER, request.request_id.as_str());

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ChatError::transport(Self::describe(&e)))?;

        let status = response.status().as_u16();
        if let Some(echoed) = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            debug!("{} {} -> {} (server request id {})", request.method.as_str(), url, status, echoed);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ChatError::transport(Self::describe(&e)))?;

        Ok(HttpReply::new(status, body.to_vec()))
    }
}
