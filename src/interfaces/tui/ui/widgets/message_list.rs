//! 消息区
//!
//! 对应原始页面的消息堆栈：按级别着色，只显示最近几条

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::interfaces::tui::app::{Message, MessageKind};
use crate::interfaces::tui::constants::{MAX_VISIBLE_MESSAGES, colors};

pub struct MessageList<'a> {
    messages: &'a [Message],
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message]) -> Self {
        Self { messages }
    }

    fn visible(&self) -> &[Message] {
        let skip = self.messages.len().saturating_sub(MAX_VISIBLE_MESSAGES);
        &self.messages[skip..]
    }

    pub fn height(&self) -> u16 {
        self.visible().len() as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .visible()
            .iter()
            .map(|m| {
                let color = match m.kind {
                    MessageKind::Info => colors::PRIMARY,
                    MessageKind::Warning => colors::WARNING,
                    MessageKind::Error => colors::ERROR,
                };
                Line::styled(m.text.clone(), Style::default().fg(color))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> Message {
        Message {
            kind: MessageKind::Error,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_only_recent_messages_visible() {
        let messages: Vec<Message> = (0..10).map(|i| msg(&format!("m{}", i))).collect();
        let list = MessageList::new(&messages);
        assert_eq!(list.height() as usize, MAX_VISIBLE_MESSAGES);
        assert_eq!(list.visible()[0].text, "m6");
    }

    #[test]
    fn test_empty_messages_zero_height() {
        let list = MessageList::new(&[]);
        assert_eq!(list.height(), 0);
    }
}
