//! 应用主状态结构

use spawn_stat_core::RouteSession;

use super::{EditCursor, FocusState, ModalState, SyncState};
use crate::backend::{SyncEvent, SyncWorker};
use crate::message::{AppMessage, SyncMessage};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 条目、路线与焦点链
    pub session: RouteSession,

    /// 路线列表焦点
    pub focus: FocusState,

    /// 编辑列表光标
    pub edit_cursor: EditCursor,

    /// 弹窗状态
    pub modal: ModalState,

    /// 后台同步状态
    pub sync: SyncState,

    /// 统计同步；客户端创建失败时为 `None`
    pub worker: Option<SyncWorker>,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例，焦点落在路线第一项
    pub fn new(session: RouteSession, worker: Option<SyncWorker>) -> Self {
        let mut app = Self {
            should_quit: false,
            session,
            focus: FocusState::default(),
            edit_cursor: EditCursor::default(),
            modal: ModalState::default(),
            sync: SyncState::default(),
            worker,
            status_message: None,
        };
        app.reset_focus();
        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 焦点条目在焦点链中的位置
    pub fn focused_position(&self) -> Option<usize> {
        self.session
            .chain()
            .and_then(|chain| chain.position_of(self.focus.target))
    }

    /// 焦点链重建后，焦点回到第一项
    pub fn reset_focus(&mut self) {
        self.focus.viewport.reset();
        self.focus.target = self
            .session
            .chain()
            .and_then(|chain| chain.focus_at(0, &mut self.focus.viewport));
    }

    /// 终端尺寸变化时更新视口高度，并保持当前行可见
    pub fn resize(&mut self, height: usize) {
        self.focus.viewport.set_height(height);
        if let Some(position) = self.focused_position() {
            self.focus.viewport.reveal(position);
        }
        self.edit_cursor.viewport.set_height(height);
        self.edit_cursor.viewport.reveal(self.edit_cursor.selected);
    }

    /// 取出一个已完成的后台结果
    pub fn poll_sync(&self) -> Option<AppMessage> {
        let event = self.worker.as_ref()?.try_recv()?;
        let msg = match event {
            SyncEvent::Submitted(result) => SyncMessage::Submitted(result),
            SyncEvent::StatsFetched(result) => SyncMessage::StatsFetched(result),
        };
        Some(AppMessage::Sync(msg))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use spawn_stat_core::types::StorageConfig;
    use spawn_stat_core::{EntryStore, FileStorage, RouteSession};

    use super::App;

    /// `len` 个条目、文件存储在临时目录中的应用
    pub fn test_app(len: usize) -> (App, tempfile::TempDir) {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let storage = Arc::new(FileStorage::new(
            StorageConfig::default().resolved_in(tmp.path()),
        ));
        let session = RouteSession::new(EntryStore::with_len(len), storage.clone(), storage);
        (App::new(session, None), tmp)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;

    #[test]
    fn starts_focused_on_first_entry() {
        let (app, _tmp) = test_app(3);
        assert_eq!(app.focus.target, Some(0));
        assert_eq!(app.focused_position(), Some(0));
    }

    #[test]
    fn empty_catalog_has_no_focus() {
        let (app, _tmp) = test_app(0);
        assert_eq!(app.focus.target, None);
    }

    #[test]
    fn no_worker_means_no_sync_messages() {
        let (app, _tmp) = test_app(1);
        assert!(app.poll_sync().is_none());
    }
}
