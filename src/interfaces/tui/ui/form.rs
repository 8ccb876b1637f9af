//! 表单渲染
//!
//! 自上而下排布：链接、"高级选项"开关、高级字段（可见时）、操作按钮。
//! 高级区内过期方式由开关决定：倒计时遮罩或绝对日期，二选一

use ratatui::{Frame, layout::Rect};

use super::widgets::{ActionButton, Checkbox, DurationField, InputField};
use crate::interfaces::tui::app::{App, FocusField};

pub fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let mut y = area.y;
    let mut place = |height: u16| {
        let rect = Rect::new(area.x, y, area.width, height);
        y += height;
        if rect.bottom() <= area.bottom() {
            Some(rect)
        } else {
            None
        }
    };

    let link = InputField::new("Link URL", &app.link_input)
        .required()
        .active(app.focus == FocusField::Link)
        .error(app.field_error(FocusField::Link))
        .char_limit(app.limits.max_link_length);
    if let Some(rect) = place(link.height()) {
        link.render(frame, rect);
    }

    let advanced = Checkbox::new("Advanced options", app.advanced_mode)
        .active(app.focus == FocusField::AdvancedToggle);
    if let Some(rect) = place(advanced.height()) {
        advanced.render(frame, rect);
    }

    if app.advanced_mode {
        let max_uses = InputField::new("Max Uses", &app.max_uses_input)
            .placeholder("unlimited")
            .active(app.focus == FocusField::MaxUses)
            .error(app.field_error(FocusField::MaxUses));
        if let Some(rect) = place(max_uses.height()) {
            max_uses.render(frame, rect);
        }

        let custom_id = InputField::new("Custom ID", &app.custom_id_input)
            .placeholder("random")
            .active(app.focus == FocusField::CustomId)
            .error(app.field_error(FocusField::CustomId))
            .char_limit(app.limits.max_custom_id_length);
        if let Some(rect) = place(custom_id.height()) {
            custom_id.render(frame, rect);
        }

        let expiry_toggle = Checkbox::new("Absolute expiry date", app.date_mode)
            .active(app.focus == FocusField::ExpiryToggle);
        if let Some(rect) = place(expiry_toggle.height()) {
            expiry_toggle.render(frame, rect);
        }

        if app.date_mode {
            let expiry = InputField::new("Expiry Date", &app.expiry_date_input)
                .placeholder("YYYY-MM-DD HH:MM")
                .active(app.focus == FocusField::ExpiryDate)
                .error(app.field_error(FocusField::ExpiryDate));
            if let Some(rect) = place(expiry.height()) {
                expiry.render(frame, rect);
            }
        } else {
            let duration = DurationField::new("Duration (DD:HH:MM:SS)", &app.duration)
                .active(app.focus == FocusField::Duration);
            if let Some(rect) = place(duration.height()) {
                duration.render(frame, rect);
            }
        }
    }

    let button =
        ActionButton::new(app.button.mode()).active(app.focus == FocusField::Button);
    if let Some(rect) = place(button.height()) {
        button.render(frame, rect);
    }
}
