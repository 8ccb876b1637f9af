//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 验证错误显示
//! - 字符计数与服务端长度上限
//! - 终端光标定位

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件，Builder 模式配置
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    /// 来自配置服务的长度上限
    char_limit: Option<usize>,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            char_limit: None,
            required: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn char_limit(mut self, limit: Option<usize>) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if !self.value.is_empty() {
            let count = self.value.chars().count();
            match self.char_limit {
                Some(max) => title = format!("{} ({}/{} chars)", title, count, max),
                None => title = format!("{} ({} chars)", title, count),
            }
        } else if let Some(placeholder) = self.placeholder {
            title = format!("{} ({})", title, placeholder);
        }

        title
    }

    /// 获取边框样式
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

    /// 渲染输入框，区域高度应为 `height()`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        // 激活时把终端光标放在文本末尾
        if self.is_active {
            let x = chunks[0].x + 1 + self.value.chars().count() as u16;
            frame.set_cursor_position((x.min(chunks[0].right().saturating_sub(2)), chunks[0].y + 1));
        }

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Link", "test");
        assert!(field.display_title().contains("Link"));
        assert!(field.display_title().contains("4 chars"));

        let field = InputField::new("Link", "").required();
        assert!(field.display_title().contains("*"));

        let field = InputField::new("Custom ID", "").placeholder("optional");
        assert!(field.display_title().contains("optional"));
    }

    #[test]
    fn test_input_field_title_with_limit() {
        let field = InputField::new("Link", "abcd").char_limit(Some(100));
        assert!(field.display_title().contains("4/100 chars"));
    }

    #[test]
    fn test_input_field_height() {
        let field = InputField::new("Link", "test");
        assert_eq!(field.height(), 3);

        let field = InputField::new("Link", "test").error(Some("Error"));
        assert_eq!(field.height(), 4);
    }
}
