//! 路线编辑消息处理

use super::log_error;
use crate::message::RouteMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: RouteMessage) {
    let len = app.session.entries().len();

    match msg {
        RouteMessage::BeginEdit => {
            // 编辑中再次进入会清空已勾选的路线
            if app.session.editor().is_editing() {
                return;
            }
            app.session.begin_edit();
            app.focus.target = None;
            app.edit_cursor.reset();
            app.set_status("Editing route: Space toggles, Enter confirms");
        }

        RouteMessage::ConfirmEdit => {
            if !app.session.editor().is_editing() {
                return;
            }
            let result = app.session.confirm_edit();
            app.reset_focus();
            match result {
                Ok(()) => {
                    let count = app.session.editor().len();
                    app.set_status(format!("Route confirmed with {count} entries"));
                }
                Err(e) => {
                    log_error("Failed to write route file", &e);
                    app.set_status(format!("Route confirmed but not written: {e}"));
                }
            }
        }

        RouteMessage::ToggleAtCursor => {
            if !app.session.editor().is_editing() || len == 0 {
                return;
            }
            let index = app.edit_cursor.selected;
            let included = !app.session.editor().contains(index);
            if let Err(e) = app.session.toggle(index, included) {
                log_error("Toggle failed", &e);
            }
        }

        RouteMessage::CursorPrevious => app.edit_cursor.select_previous(),
        RouteMessage::CursorNext => app.edit_cursor.select_next(len),
        RouteMessage::CursorFirst => app.edit_cursor.select_first(),
        RouteMessage::CursorLast => app.edit_cursor.select_last(len),
    }
}
