//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use spawn_stat_core::types::DropKind;

use crate::event::keymap::DefaultKeymap;
use crate::message::{
    AppMessage, FocusMessage, ModalMessage, PersistMessage, RouteMessage, SyncMessage,
};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时主循环会重新计算视口
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，只处理关闭
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if let Some(msg) = handle_global_keys(&key) {
        return msg;
    }

    if app.session.editor().is_editing() {
        handle_editing_keys(key)
    } else {
        handle_confirmed_keys(key)
    }
}

/// 弹窗打开时的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

/// 全局快捷键（与编辑模式无关）
fn handle_global_keys(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::QUIT.matches(key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::BACK.matches(key) {
        AppMessage::GoBack
    } else if DefaultKeymap::SAVE.matches(key) || DefaultKeymap::SAVE_ALT.matches(key) {
        AppMessage::Persist(PersistMessage::Save)
    } else if DefaultKeymap::LOAD.matches(key) {
        AppMessage::Persist(PersistMessage::Load)
    } else if DefaultKeymap::SUBMIT.matches(key) {
        AppMessage::Sync(SyncMessage::Submit)
    } else if DefaultKeymap::REFETCH.matches(key) {
        AppMessage::Sync(SyncMessage::RefetchStats)
    } else if DefaultKeymap::EDIT_ROUTE.matches(key) {
        AppMessage::Route(RouteMessage::BeginEdit)
    } else if DefaultKeymap::CONFIRM_ROUTE.matches(key) {
        AppMessage::Route(RouteMessage::ConfirmEdit)
    } else {
        return None;
    };
    Some(msg)
}

/// 编辑模式：光标在全部条目上移动
fn handle_editing_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE.matches(&key) {
        return AppMessage::Route(RouteMessage::ToggleAtCursor);
    }
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Route(RouteMessage::ConfirmEdit);
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Route(RouteMessage::CursorPrevious),
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Route(RouteMessage::CursorNext),
        KeyCode::Home => AppMessage::Route(RouteMessage::CursorFirst),
        KeyCode::End => AppMessage::Route(RouteMessage::CursorLast),
        _ => AppMessage::Noop,
    }
}

/// 已确认模式：焦点沿路线移动
fn handle_confirmed_keys(key: KeyEvent) -> AppMessage {
    let classify = |kind| AppMessage::Focus(FocusMessage::Classify(kind));

    if DefaultKeymap::CLASSIFY_SINGLE_ONE_STAR.matches(&key) {
        return classify(DropKind::SingleOneStar);
    }
    if DefaultKeymap::CLASSIFY_DOUBLE_ONE_STAR.matches(&key) {
        return classify(DropKind::DoubleOneStar);
    }
    if DefaultKeymap::CLASSIFY_SINGLE_TWO_STAR.matches(&key) {
        return classify(DropKind::SingleTwoStar);
    }
    if DefaultKeymap::CLEAR_CLASSIFICATION.matches(&key) {
        return AppMessage::Focus(FocusMessage::ClearClassification);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Focus(FocusMessage::Previous),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Focus(FocusMessage::Next),
        KeyCode::Home => AppMessage::Focus(FocusMessage::First),
        KeyCode::End => AppMessage::Focus(FocusMessage::Last),
        _ => AppMessage::Noop,
    }
}
