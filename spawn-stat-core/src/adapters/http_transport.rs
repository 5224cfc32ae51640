//! reqwest-backed stats transport
//!
//! Sending, status logging and error mapping follow one flow for both verbs;
//! interpreting the body is left to `RemoteSync`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};

use crate::error::{CoreError, CoreResult};
use crate::traits::{HttpReply, StatsTransport};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP transport to the stats service
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client with the given request timeout.
    ///
    /// # Errors
    /// `NetworkError` when the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Send a request and read the whole body.
    ///
    /// # Returns
    /// * `Ok(HttpReply)` - any HTTP answer, whatever the status
    /// * `Err(CoreError::Timeout)` - client timeout elapsed
    /// * `Err(CoreError::NetworkError)` - connection or body read failure
    async fn execute(request: RequestBuilder, method: &str, url: &str) -> CoreResult<HttpReply> {
        log::debug!("[stats] {method} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[stats] Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        log::debug!("[stats] Response Body: {}", truncate_for_log(&body));

        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl StatsTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> CoreResult<HttpReply> {
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        Self::execute(request, "POST", url).await
    }

    async fn get(&self, url: &str) -> CoreResult<HttpReply> {
        Self::execute(self.client.get(url), "GET", url).await
    }
}
