//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use spawn_stat_core::EditMode;

use crate::model::App;

use super::components;
use super::pages::{self, DETAIL_HEIGHT};
use super::theme::{colors, Styles};

/// 标题栏 + 状态栏
const BAR_ROWS: u16 = 2;
/// 内容区上下边框
const BORDER_ROWS: u16 = 2;

/// 终端高度为 `total` 时列表可见的行数
pub fn list_height(total: u16) -> usize {
    usize::from(
        total
            .saturating_sub(BAR_ROWS + BORDER_ROWS + DETAIL_HEIGHT)
            .max(1),
    )
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let entries = app.session.entries().len();
    let title = Paragraph::new(format!(
        " Artifact Spawn Stat v{}  ({entries} spots)",
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 按编辑模式渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let editing = app.session.mode() == EditMode::Editing;

    let (title, border) = if editing {
        (" Edit Route ", c.border_focused)
    } else {
        (" Route ", c.border)
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if editing {
        pages::editor::render(app, frame, inner_area);
    } else {
        pages::route::render(app, frame, inner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_height_leaves_room_for_chrome() {
        assert_eq!(list_height(30), 24);
        assert_eq!(list_height(3), 1);
    }
}
