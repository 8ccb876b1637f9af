//! 复选框行

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::constants::colors;

pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    is_active: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool) -> Self {
        Self {
            label,
            checked,
            is_active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn height(&self) -> u16 {
        2
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let marker = if self.checked { "[x]" } else { "[ ]" };
        let marker_style = if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(colors::SUCCESS).bold()
        };

        let line = Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(
                format!(" {} (Space to toggle)", self.label),
                Style::default().fg(colors::MUTED),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
