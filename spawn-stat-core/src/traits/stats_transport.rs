//! Stats service transport abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Raw HTTP answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport used by `RemoteSync`
///
/// Platform implementation:
/// - `HttpTransport` (reqwest)
///
/// Connection failures and timeouts are errors; any HTTP answer, whatever
/// its status, is an `Ok(HttpReply)`.
#[async_trait]
pub trait StatsTransport: Send + Sync {
    /// POST a JSON body
    ///
    /// # Arguments
    /// * `url` - target endpoint
    /// * `body` - serialized JSON, sent with `Content-Type: application/json`
    async fn post_json(&self, url: &str, body: String) -> CoreResult<HttpReply>;

    /// GET a document
    ///
    /// # Arguments
    /// * `url` - source endpoint
    async fn get(&self, url: &str) -> CoreResult<HttpReply>;
}
