//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use spawn_stat_core::EditMode;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据编辑模式生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.sync.is_busy() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("⟳", Style::default().fg(Color::Yellow)));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.session.mode() {
        EditMode::Editing => {
            hints.push(("↑↓", "Move"));
            hints.push(("Space", "Toggle"));
            hints.push(("Enter", "Confirm"));
        }
        EditMode::Confirmed => {
            hints.push(("↑↓", "Focus"));
            hints.push(("1/2/3", "Classify"));
            hints.push(("Ctrl+s", "Save"));
            hints.push(("Alt+u", "Submit"));
            hints.push(("Alt+e", "Edit"));
        }
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));

    hints
}
