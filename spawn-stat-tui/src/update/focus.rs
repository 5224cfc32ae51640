//! 焦点与分类消息处理

use spawn_stat_core::types::DropKind;

use super::log_error;
use crate::message::FocusMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: FocusMessage) {
    match msg {
        FocusMessage::Previous => {
            if let Some(chain) = app.session.chain() {
                if let Some(target) = chain.prev(app.focus.target, &mut app.focus.viewport) {
                    app.focus.target = Some(target);
                }
            }
        }

        FocusMessage::Next => {
            if let Some(chain) = app.session.chain() {
                if let Some(target) = chain.next(app.focus.target, &mut app.focus.viewport) {
                    app.focus.target = Some(target);
                }
            }
        }

        FocusMessage::First => {
            if let Some(chain) = app.session.chain() {
                if let Some(target) = chain.focus_at(0, &mut app.focus.viewport) {
                    app.focus.target = Some(target);
                }
            }
        }

        FocusMessage::Last => {
            if let Some(chain) = app.session.chain() {
                let last = chain.len().saturating_sub(1);
                if let Some(target) = chain.focus_at(last, &mut app.focus.viewport) {
                    app.focus.target = Some(target);
                }
            }
        }

        FocusMessage::Classify(kind) => {
            let Some(target) = app.focus.target else {
                app.set_status("No entry focused");
                return;
            };
            match app
                .session
                .classify_and_advance(target, kind, &mut app.focus.viewport)
            {
                Ok(Some(next)) => app.focus.target = Some(next),
                Ok(None) => {}
                Err(e) => log_error("Classification failed", &e),
            }
        }

        FocusMessage::ClearClassification => {
            let Some(target) = app.focus.target else {
                return;
            };
            if let Err(e) = app.session.classify(target, DropKind::None) {
                log_error("Clearing classification failed", &e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;

    #[test]
    fn next_and_previous_follow_route() {
        let (mut app, _tmp) = test_app(3);
        update(&mut app, FocusMessage::Next);
        update(&mut app, FocusMessage::Next);
        update(&mut app, FocusMessage::Next);
        assert_eq!(app.focus.target, Some(2));

        update(&mut app, FocusMessage::Previous);
        assert_eq!(app.focus.target, Some(1));
        update(&mut app, FocusMessage::First);
        assert_eq!(app.focus.target, Some(0));
        update(&mut app, FocusMessage::Previous);
        assert_eq!(app.focus.target, Some(0));
        update(&mut app, FocusMessage::Last);
        assert_eq!(app.focus.target, Some(2));
    }

    #[test]
    fn classify_advances_focus() {
        let (mut app, _tmp) = test_app(2);
        update(&mut app, FocusMessage::Classify(DropKind::DoubleOneStar));
        assert_eq!(
            app.session.entries().classification(0).unwrap(),
            DropKind::DoubleOneStar
        );
        assert_eq!(app.focus.target, Some(1));

        // 最后一项：分类但不移动
        update(&mut app, FocusMessage::Classify(DropKind::SingleOneStar));
        assert_eq!(app.focus.target, Some(1));

        update(&mut app, FocusMessage::ClearClassification);
        assert_eq!(
            app.session.entries().classification(1).unwrap(),
            DropKind::None
        );
    }

    #[test]
    fn scrolling_keeps_focus_visible() {
        let (mut app, _tmp) = test_app(10);
        app.resize(3);
        for _ in 0..5 {
            update(&mut app, FocusMessage::Next);
        }
        assert_eq!(app.focus.target, Some(5));
        assert_eq!(app.focus.viewport.offset(), 3);
    }

    #[test]
    fn classify_without_focus_sets_status() {
        let (mut app, _tmp) = test_app(0);
        update(&mut app, FocusMessage::Classify(DropKind::SingleOneStar));
        assert!(app.status_message.is_some());
    }
}
