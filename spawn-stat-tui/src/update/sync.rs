//! 统计同步消息处理

use super::log_error;
use crate::message::SyncMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SyncMessage) {
    match msg {
        SyncMessage::Submit => submit(app),

        SyncMessage::RefetchStats => {
            let Some(worker) = &app.worker else {
                app.set_status("Stats service unavailable");
                return;
            };
            if app.sync.fetching {
                return;
            }
            worker.fetch_stats();
            app.sync.fetching = true;
            app.set_status("Fetching stats...");
        }

        SyncMessage::Submitted(result) => {
            app.sync.submitting = false;
            match result {
                Ok(submitted) => {
                    let cleared = app.session.apply_submit_success(&submitted);
                    app.set_status(format!("Submitted, {cleared} classifications cleared"));
                }
                Err(e) => {
                    log_error("Submission failed", &e);
                    app.clear_status();
                    let message = if e.is_retryable() {
                        format!(
                            "{e}\n\nClassifications were kept. Save them with Ctrl+s \
                             and load them later with Alt+l to retry."
                        )
                    } else {
                        format!("{e}\n\nClassifications were kept.")
                    };
                    app.modal.show_error("Submit failed", message);
                }
            }
        }

        SyncMessage::StatsFetched(result) => {
            app.sync.fetching = false;
            match result.and_then(|update| app.session.apply_stats(&update)) {
                Ok(count) => app.set_status(format!("Stats updated for {count} entries")),
                // 结构不对的统计文档只记日志，保留旧统计
                Err(e) if e.is_structural() => log_error("Ignoring stats response", &e),
                Err(e) => {
                    log_error("Fetching stats failed", &e);
                    app.set_status(format!("Stats unavailable: {e}"));
                }
            }
        }
    }
}

fn submit(app: &mut App) {
    if app.worker.is_none() {
        app.set_status("Stats service unavailable");
        return;
    }
    if app.sync.submitting {
        app.set_status("Submission already in progress");
        return;
    }

    let request = match app.session.submission_request() {
        Ok(request) => request,
        Err(e) => {
            log_error("Building submission failed", &e);
            app.set_status(format!("Cannot submit: {e}"));
            return;
        }
    };
    let count = request.drops.len();

    if let Some(worker) = &app.worker {
        worker.submit(request);
    }
    app.sync.submitting = true;
    app.set_status(format!("Submitting {count} entries..."));
}

#[cfg(test)]
mod tests {
    use spawn_stat_core::types::DropKind;
    use spawn_stat_core::{CoreError, StatsUpdate};

    use super::*;
    use crate::message::{AppMessage, FocusMessage};
    use crate::model::state::Modal;
    use crate::model::test_support::test_app;

    #[test]
    fn submit_without_worker_reports_status() {
        let (mut app, _tmp) = test_app(2);
        update(&mut app, SyncMessage::Submit);
        assert!(!app.sync.submitting);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Stats service unavailable")
        );
    }

    #[test]
    fn successful_submit_clears_classifications() {
        let (mut app, _tmp) = test_app(2);
        app.session.classify(0, DropKind::SingleOneStar).unwrap();
        let sent = app.session.submission_request().unwrap();
        app.sync.submitting = true;

        update(&mut app, SyncMessage::Submitted(Ok(sent)));
        assert!(!app.sync.submitting);
        assert_eq!(
            app.session.entries().classification(0).unwrap(),
            DropKind::None
        );
    }

    #[test]
    fn classification_made_during_submit_survives_success() {
        let (mut app, _tmp) = test_app(2);
        app.session.classify(0, DropKind::SingleOneStar).unwrap();
        let sent = app.session.submission_request().unwrap();
        assert_eq!(sent.drops.len(), 1);
        app.sync.submitting = true;

        // 请求在途时继续分类第 1 项
        app.focus.target = Some(1);
        crate::update::update(
            &mut app,
            AppMessage::Focus(FocusMessage::Classify(DropKind::SingleTwoStar)),
        );

        update(&mut app, SyncMessage::Submitted(Ok(sent)));
        assert_eq!(
            app.session.entries().classification(0).unwrap(),
            DropKind::None
        );
        assert_eq!(
            app.session.entries().classification(1).unwrap(),
            DropKind::SingleTwoStar
        );
    }

    #[test]
    fn failed_submit_keeps_classifications_and_shows_error() {
        let (mut app, _tmp) = test_app(2);
        app.session.classify(1, DropKind::SingleTwoStar).unwrap();
        app.sync.submitting = true;

        update(
            &mut app,
            SyncMessage::Submitted(Err(CoreError::Timeout("30s".to_string()))),
        );
        assert!(!app.sync.submitting);
        assert!(app.modal.is_open());
        assert_eq!(
            app.session.entries().classification(1).unwrap(),
            DropKind::SingleTwoStar
        );
    }

    fn submit_error_message(err: CoreError) -> String {
        let (mut app, _tmp) = test_app(1);
        app.sync.submitting = true;
        update(&mut app, SyncMessage::Submitted(Err(err)));
        match app.modal.active {
            Some(Modal::Error { message, .. }) => message,
            other => panic!("expected error modal, got {other:?}"),
        }
    }

    #[test]
    fn save_load_hint_only_for_retryable_failures() {
        let timeout = submit_error_message(CoreError::Timeout("30s".to_string()));
        assert!(timeout.contains("Ctrl+s"));

        let storage = submit_error_message(CoreError::StorageError("disk full".to_string()));
        assert!(!storage.contains("Ctrl+s"));
        assert!(storage.contains("Classifications were kept."));
    }

    #[test]
    fn fetched_stats_are_applied() {
        let (mut app, _tmp) = test_app(2);
        app.sync.fetching = true;
        let stats = StatsUpdate::parse(r#"{"error":false,"drops":[[4,0,1]]}"#).unwrap();

        update(&mut app, SyncMessage::StatsFetched(Ok(stats)));
        assert!(!app.sync.fetching);
        assert_eq!(app.session.entries().get(0).unwrap().stats.single_one_star, 4);
    }

    #[test]
    fn failed_fetch_leaves_stats_untouched() {
        let (mut app, _tmp) = test_app(1);
        update(
            &mut app,
            SyncMessage::StatsFetched(Err(CoreError::NetworkError("refused".to_string()))),
        );
        assert!(!app.modal.is_open());
        assert!(app.status_message.unwrap().starts_with("Stats unavailable"));
    }

    #[test]
    fn malformed_stats_are_ignored_quietly() {
        let (mut app, _tmp) = test_app(1);
        app.sync.fetching = true;
        update(
            &mut app,
            SyncMessage::StatsFetched(Err(CoreError::MalformedPayload("drops".to_string()))),
        );
        assert!(!app.sync.fetching);
        assert!(app.status_message.is_none());
    }
}
