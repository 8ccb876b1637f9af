//! 倒计时遮罩输入框
//!
//! 逐字符渲染 `DD:HH:MM:SS` 模板：冒号淡化、选区高亮、光标反色。
//! 光标位置 11（模板末尾）渲染为一个反色的尾随空格

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::form::EditorState;
use crate::form::duration::{DurationText, TEMPLATE_LEN};
use crate::interfaces::tui::constants::colors;

pub struct DurationField<'a> {
    title: &'a str,
    state: &'a EditorState,
    is_active: bool,
}

impl<'a> DurationField<'a> {
    pub fn new(title: &'a str, state: &'a EditorState) -> Self {
        Self {
            title,
            state,
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

    fn cell_style(&self, i: usize) -> Style {
        let base = if DurationText::is_separator(i) {
            Style::default().fg(colors::MUTED)
        } else {
            Style::default().fg(Color::White)
        };

        if !self.is_active {
            return base;
        }
        if self.state.selection.is_some_and(|sel| sel.contains(i)) {
            return base.bg(colors::PRIMARY).fg(colors::HIGHLIGHT_FG);
        }
        if self.state.cursor == i {
            return base.reversed();
        }
        base
    }

    fn line(&self) -> Line<'a> {
        let mut spans: Vec<Span> = (0..TEMPLATE_LEN)
            .map(|i| Span::styled(self.state.text.char_at(i).to_string(), self.cell_style(i)))
            .collect();

        // 光标在模板末尾时需要一个可见的落点
        let end_style = if self.is_active && self.state.cursor == TEMPLATE_LEN {
            Style::default().reversed()
        } else {
            Style::default()
        };
        spans.push(Span::styled(" ", end_style));

        Line::from(spans)
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let widget = Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.title)
                .border_style(self.border_style()),
        );
        frame.render_widget(widget, area);
    }
}
