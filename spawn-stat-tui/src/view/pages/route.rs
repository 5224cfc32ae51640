//! 路线页面视图
//!
//! 每行一个调查点：序号、名称、当前分类、聚合统计。
//! 列表下方显示焦点条目的图片路径。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use spawn_stat_core::types::{AggregateSummary, DropKind, Entry};
use unicode_width::UnicodeWidthStr;

use super::DETAIL_HEIGHT;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染路线页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let entries: Vec<&Entry> = app
        .session
        .chain()
        .map(|chain| {
            chain
                .handles()
                .iter()
                .filter_map(|&index| app.session.entries().get(index).ok())
                .collect()
        })
        .unwrap_or_default();

    if entries.is_empty() {
        render_empty(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)])
        .split(area);

    render_list(app, &entries, frame, chunks[0]);
    render_detail(app, frame, chunks[1]);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  The route is empty", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "  Press Alt+e to pick spots for the route",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, entries: &[&Entry], frame: &mut Frame, area: Rect) {
    let c = colors();
    let label_width = entries
        .iter()
        .map(|entry| entry.descriptor.label.width())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let drop_style = if entry.drop.is_none() {
                Style::default().fg(c.muted)
            } else {
                Style::default().fg(c.star)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4} ", position + 1), Styles::muted()),
                Span::raw(pad(&entry.descriptor.label, label_width)),
                Span::raw("  "),
                Span::styled(pad(entry.drop.label(), drop_label_width()), drop_style),
                Span::raw("  "),
                Span::styled(format_summary(&entry.stats.summary()), Styles::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default()
        .with_offset(app.focus.viewport.offset())
        .with_selected(app.focused_position());

    frame.render_stateful_widget(list, area, &mut state);
}

/// 焦点条目的图片路径
fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let Some(entry) = app
        .focus
        .target
        .and_then(|index| app.session.entries().get(index).ok())
    else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" map  ", Styles::muted()),
            Span::raw(entry.descriptor.map_path.display().to_string()),
        ]),
        Line::from(vec![
            Span::styled(" spot ", Styles::muted()),
            Span::raw(entry.descriptor.spot_path.display().to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn drop_label_width() -> usize {
    DropKind::CLASSIFIED
        .iter()
        .map(|kind| kind.label().width())
        .max()
        .unwrap_or(0)
}

/// 按显示宽度右侧补空格
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn format_summary(summary: &AggregateSummary) -> String {
    if summary.records == 0 {
        return "no records".to_string();
    }
    format!(
        "n={}  exp {:.1}  ★ {:.0}%  ★x2 {:.0}%  ★★ {:.0}%",
        summary.records,
        summary.avg_exp,
        summary.single_one_star_pct,
        summary.double_one_star_pct,
        summary.single_two_star_pct,
    )
}
