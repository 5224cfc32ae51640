//! Save / Load 消息处理

use spawn_stat_core::CoreError;

use super::log_error;
use crate::message::PersistMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: PersistMessage) {
    match msg {
        PersistMessage::Save => match app.session.save() {
            Ok(count) => app.set_status(format!("Saved {count} classified entries")),
            Err(e) => {
                log_error("Save failed", &e);
                app.modal.show_error("Save failed", e.to_string());
            }
        },

        // Load 会整体替换分类，不能与在途的提交交错
        PersistMessage::Load if app.sync.submitting => {
            app.set_status("Submission in progress, load again once it finishes");
        }

        PersistMessage::Load => match app.session.load() {
            Ok(None) => app.set_status("No save file found"),
            Ok(Some(count)) => {
                app.reset_focus();
                app.set_status(format!("Loaded {count} classified entries"));
            }
            Err(CoreError::UnexpectedRoot(expected)) => {
                // 根不是数组的文档直接忽略
                log::warn!("Ignoring save file, expected {expected} root");
            }
            Err(e @ CoreError::MalformedPayload(_)) => {
                log_error("Save file rejected", &e);
                app.set_status(format!("Save file rejected: {e}"));
            }
            Err(e) => {
                log_error("Load failed", &e);
                // 校验之后的失败只可能来自路线文件写入，路线已重建
                app.reset_focus();
                app.modal.show_error("Load failed", e.to_string());
            }
        },
    }
}
