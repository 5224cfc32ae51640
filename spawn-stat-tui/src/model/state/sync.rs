//! 后台同步状态

/// 正在进行的后台请求
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncState {
    pub submitting: bool,
    pub fetching: bool,
}

impl SyncState {
    pub fn is_busy(&self) -> bool {
        self.submitting || self.fetching
    }
}
