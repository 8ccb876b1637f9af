//! UI 入口与整体布局

mod form;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::Paragraph,
};

use super::app::App;
use super::constants::{FORM_MAX_WIDTH, colors};
use widgets::MessageList;

/// 渲染一帧：标题、居中的表单、消息区、快捷键提示
pub fn ui(frame: &mut Frame, app: &App) {
    let messages = MessageList::new(&app.messages);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(messages.height()),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("shortform")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::PRIMARY).bold());
    frame.render_widget(title, chunks[0]);

    form::draw_form(frame, app, centered_column(chunks[1], FORM_MAX_WIDTH));
    messages.render(frame, centered_column(chunks[2], FORM_MAX_WIDTH));

    let hints = Paragraph::new("Tab next · Shift+Tab prev · Enter submit · Space toggle · Esc quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::MUTED));
    frame.render_widget(hints, chunks[3]);
}

/// 水平居中、限制最大宽度的列
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_column_narrow_terminal() {
        let area = Rect::new(0, 0, 40, 20);
        let col = centered_column(area, 72);
        assert_eq!(col.width, 40);
        assert_eq!(col.x, 0);
    }

    #[test]
    fn test_centered_column_wide_terminal() {
        let area = Rect::new(0, 0, 100, 20);
        let col = centered_column(area, 72);
        assert_eq!(col.width, 72);
        assert_eq!(col.x, 14);
    }
}
