//!
//! src/update/mod.rs
//! Update 层：消费消息、修改状态
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod focus;      // 焦点移动与分类
//!         mod modal;      // 弹窗
//!         mod persist;    // Save / Load
//!         mod route;      // 路线编辑
//!         mod sync;       // 统计同步
//!
//!
//!     错误处理：
//!         core 返回的 CoreError 按 is_expected() 选择日志级别（warn / error），
//!         再决定是写入状态栏还是弹出错误窗口。
//!

mod focus;
mod modal;
mod persist;
mod route;
mod sync;

use spawn_stat_core::CoreError;

use crate::message::{AppMessage, SyncMessage};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Route(route_msg) => {
            route::update(app, route_msg);
        }

        AppMessage::Focus(focus_msg) => {
            focus::update(app, focus_msg);
        }

        AppMessage::Persist(persist_msg) => {
            persist::update(app, persist_msg);
        }

        AppMessage::Sync(sync_msg) => {
            sync::update(app, sync_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 启动：恢复路线文件，并按配置拉取统计
pub fn startup(app: &mut App, fetch_stats: bool) {
    let restored = app.session.restore_route();
    // 写回路线文件失败时路线仍已重建
    app.reset_focus();
    match restored {
        Ok(true) => {
            log::info!(
                "Restored route with {} entries",
                app.session.editor().len()
            );
        }
        Ok(false) => {}
        Err(e) => {
            log_error("Failed to restore route", &e);
            app.set_status(format!("Route file not restored: {e}"));
        }
    }

    if fetch_stats {
        update(app, AppMessage::Sync(SyncMessage::RefetchStats));
    }
}

/// 按错误类型选择日志级别
fn log_error(context: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("{context}: {e}");
    } else {
        log::error!("{context}: {e}");
    }
}
