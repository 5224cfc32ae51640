//! Test helpers
//!
//! In-memory stores, a scripted transport and session factories.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::services::RouteSession;
use crate::state::EntryStore;
use crate::traits::{HttpReply, RouteStore, SaveStore, ScrollContainer, StatsTransport};

// ===== MemoryStore =====

/// In-memory document store implementing both `RouteStore` and `SaveStore`
#[derive(Default)]
pub struct MemoryStore {
    route: Mutex<Option<String>>,
    save: Mutex<Option<String>>,
    /// When set, every write fails with `StorageError`
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn route(&self) -> Option<String> {
        self.route.lock().unwrap().clone()
    }

    pub fn save(&self) -> Option<String> {
        self.save.lock().unwrap().clone()
    }

    pub fn set_route(&self, content: &str) {
        *self.route.lock().unwrap() = Some(content.to_string());
    }

    pub fn set_save(&self, content: &str) {
        *self.save.lock().unwrap() = Some(content.to_string());
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_write(&self) -> CoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::StorageError("disk full".to_string()));
        }
        Ok(())
    }
}

impl RouteStore for MemoryStore {
    fn read_route(&self) -> CoreResult<Option<String>> {
        Ok(self.route())
    }

    fn write_route(&self, content: &str) -> CoreResult<()> {
        self.check_write()?;
        self.set_route(content);
        Ok(())
    }
}

impl SaveStore for MemoryStore {
    fn read_save(&self) -> CoreResult<Option<String>> {
        Ok(self.save())
    }

    fn write_save(&self, content: &str) -> CoreResult<()> {
        self.check_write()?;
        self.set_save(content);
        Ok(())
    }
}

// ===== MockTransport =====

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// Transport that replays queued results in order
pub struct MockTransport {
    replies: Mutex<VecDeque<CoreResult<HttpReply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_reply(&self, reply: HttpReply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    pub fn push_error(&self, err: CoreError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: RecordedRequest) -> CoreResult<HttpReply> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::NetworkError("no reply queued".to_string())))
    }
}

#[async_trait]
impl StatsTransport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> CoreResult<HttpReply> {
        self.next(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            body: Some(body),
        })
    }

    async fn get(&self, url: &str) -> CoreResult<HttpReply> {
        self.next(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
    }
}

// ===== RowViewport =====

/// One-row viewport: only the row at `offset` is visible
#[derive(Default)]
pub struct RowViewport {
    pub offset: isize,
}

impl ScrollContainer for RowViewport {
    fn relative_offset(&self, position: usize) -> isize {
        position as isize - self.offset
    }

    fn scroll_by(&mut self, delta: isize) {
        self.offset += delta;
    }
}

// ===== Factories =====

/// Session over `len` entries; route and save documents share one memory store
pub fn session_with(len: usize) -> (RouteSession, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let session = RouteSession::new(EntryStore::with_len(len), store.clone(), store.clone());
    (session, store)
}
