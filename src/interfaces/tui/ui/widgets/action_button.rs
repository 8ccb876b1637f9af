//! 三态操作按钮
//!
//! 标签和颜色跟随 ButtonMode：Shorten / Copy / Copied!

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::form::ButtonMode;
use crate::interfaces::tui::constants::colors;

pub struct ActionButton {
    mode: ButtonMode,
    is_active: bool,
}

impl ActionButton {
    pub fn new(mode: ButtonMode) -> Self {
        Self {
            mode,
            is_active: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn height(&self) -> u16 {
        3
    }

    fn mode_color(&self) -> Color {
        match self.mode {
            ButtonMode::Create => colors::PRIMARY,
            ButtonMode::ReadyToCopy => colors::SUCCESS,
            ButtonMode::Copied => colors::WARNING,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(self.mode_color())
        };

        let label = Paragraph::new(self.mode.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.mode_color()).bold())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        frame.render_widget(label, area);
    }
}
