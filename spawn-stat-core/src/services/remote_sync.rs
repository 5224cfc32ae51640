//! Stats service synchronization
//!
//! Both directions are split so no session state is borrowed across the
//! network call:
//!
//! ```text
//! submit:  RouteSession::submission_request()  ->  RemoteSync::submit()  ->  apply_submit_success(&request)
//! receive:                                         RemoteSync::fetch_stats() -> StatsUpdate::apply()
//! ```

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::state::EntryStore;
use crate::traits::{HttpReply, StatsTransport};
use crate::types::{DropStats, StatsResponse, SubmitRequest, SubmitResponse, SyncConfig};
use crate::utils::log_sanitizer::truncate_for_log;

/// Validated aggregate stats, ready to be applied positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsUpdate {
    rows: Vec<DropStats>,
}

impl StatsUpdate {
    /// Parse a stats response body.
    ///
    /// # Errors
    /// `MalformedPayload` when the body is not `{error: bool, drops: [[u,u,u], ...]}`
    /// or the service reports `error: true`.
    pub fn parse(body: &str) -> CoreResult<Self> {
        let response: StatsResponse =
            serde_json::from_str(body).map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
        if response.error {
            return Err(CoreError::MalformedPayload(
                "stats service reported an error".to_string(),
            ));
        }
        Ok(Self {
            rows: response.drops.into_iter().map(DropStats::from).collect(),
        })
    }

    /// Overwrite stats of the first `min(rows, N)` entries; returns that count.
    pub fn apply(&self, store: &mut EntryStore) -> CoreResult<usize> {
        let count = self.rows.len().min(store.len());
        if self.rows.len() > store.len() {
            log::warn!(
                "Stats carry {} rows for {} entries, ignoring the rest",
                self.rows.len(),
                store.len()
            );
        }
        for (index, stats) in self.rows.iter().take(count).enumerate() {
            store.set_stats(index, *stats)?;
        }
        Ok(count)
    }
}

/// Stats service client
pub struct RemoteSync {
    transport: Arc<dyn StatsTransport>,
    config: SyncConfig,
}

impl RemoteSync {
    #[must_use]
    pub fn new(transport: Arc<dyn StatsTransport>, config: SyncConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// POST the classifications.
    ///
    /// Succeeds only on HTTP 200 with `{"status": "success"}`; the caller then
    /// clears the classifications. Every failure leaves state untouched.
    pub async fn submit(&self, request: &SubmitRequest) -> CoreResult<()> {
        let body = serde_json::to_string(request)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        log::info!("Submitting {} classified entries", request.drops.len());

        let reply = self
            .transport
            .post_json(&self.config.submit_url, body)
            .await?;
        let reply = Self::expect_ok(reply)?;

        let response: SubmitResponse = serde_json::from_str(&reply.body).map_err(|e| {
            log::warn!(
                "Unreadable submit response: {e}, body: {}",
                truncate_for_log(&reply.body)
            );
            CoreError::SubmissionRejected(format!("unreadable response: {e}"))
        })?;
        if !response.is_success() {
            return Err(CoreError::SubmissionRejected(response.status));
        }
        Ok(())
    }

    /// GET the aggregate stats.
    pub async fn fetch_stats(&self) -> CoreResult<StatsUpdate> {
        let reply = self.transport.get(&self.config.stats_url).await?;
        let reply = Self::expect_ok(reply)?;
        StatsUpdate::parse(&reply.body)
    }

    fn expect_ok(reply: HttpReply) -> CoreResult<HttpReply> {
        if reply.status == 200 {
            Ok(reply)
        } else {
            Err(CoreError::UnexpectedResponse {
                status: reply.status,
                body: reply.body,
            })
        }
    }
}
