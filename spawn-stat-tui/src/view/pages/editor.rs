//! 路线编辑页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::DETAIL_HEIGHT;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染编辑页面：全部条目，已选中的显示路线序号
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let entries = app.session.entries();
    if entries.is_empty() {
        let content = vec![
            Line::from(""),
            Line::styled("  No spots found", Style::default().fg(Color::Gray)),
            Line::from(""),
            Line::styled(
                "  Check resourceDir in the config file",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(DETAIL_HEIGHT)])
        .split(area);

    // 条目索引 -> 路线序号
    let mut order = vec![None; entries.len()];
    let route = app.session.editor().current_route();
    for (position, &index) in route.iter().enumerate() {
        if let Some(slot) = order.get_mut(index) {
            *slot = Some(position + 1);
        }
    }

    let c = colors();
    let items: Vec<ListItem> = entries
        .iter()
        .zip(&order)
        .map(|(entry, position)| {
            let (mark, number) = match position {
                Some(n) => ("[x]", format!("{n:>4}")),
                None => ("[ ]", "    ".to_string()),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {mark} "), Style::default().fg(c.success)),
                Span::styled(number, Styles::muted()),
                Span::raw("  "),
                Span::raw(entry.descriptor.label.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default()
        .with_offset(app.edit_cursor.viewport.offset())
        .with_selected(Some(app.edit_cursor.selected));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let footer = Line::from(vec![
        Span::styled(
            format!(" {} of {} spots selected", route.len(), entries.len()),
            Style::default().fg(c.warning),
        ),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
