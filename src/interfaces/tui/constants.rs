//! TUI 常量定义
//!
//! 集中管理 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 事件轮询间隔，同时驱动按钮回退和后台任务结果的消化
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// 表单最大宽度（列）
pub const FORM_MAX_WIDTH: u16 = 72;

/// 消息区最多显示的行数
pub const MAX_VISIBLE_MESSAGES: usize = 4;

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
