//! App state definition and basic state management
//!
//! 包含核心 App 结构、焦点循环和消息区状态；提交与校验逻辑在子模块中

mod submit;
mod validation;

pub use submit::ApiEvent;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::client::{ApiContext, ConfigClient, LinkClient};
use crate::config::AppConfig;
use crate::form::{ButtonState, EditorState, FieldLimits};

/// 可聚焦的表单元素。高级模式和过期方式决定哪些可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    Link,
    AdvancedToggle,
    MaxUses,
    CustomId,
    ExpiryToggle,
    Duration,
    ExpiryDate,
    Button,
}

impl FocusField {
    /// 获取字段名称（用于验证错误的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::MaxUses => "max_uses",
            Self::CustomId => "custom_id",
            Self::ExpiryDate => "expiry_date",
            Self::AdvancedToggle | Self::ExpiryToggle | Self::Duration | Self::Button => "",
        }
    }
}

/// 消息级别，对应消息区的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

pub struct App {
    // Form fields
    pub link_input: String,
    pub max_uses_input: String,
    pub custom_id_input: String,
    pub expiry_date_input: String,
    pub duration: EditorState,
    pub advanced_mode: bool,
    /// `true` = absolute expiry date, `false` = duration countdown.
    pub date_mode: bool,

    // UI state
    pub focus: FocusField,
    pub button: ButtonState,
    pub messages: Vec<Message>,
    pub validation_errors: HashMap<&'static str, String>,

    // Service state
    pub limits: FieldLimits,
    pub(crate) link_client: Arc<LinkClient>,
    pub(crate) request_seq: u64,
    pub(crate) events_tx: Sender<ApiEvent>,
    events_rx: Receiver<ApiEvent>,
}

impl App {
    /// Build the app and kick off the one-shot config fetch.
    ///
    /// Must be called from within the tokio runtime: the HTTP calls run on
    /// the blocking pool.
    pub fn new(config: &AppConfig) -> App {
        let ctx = Arc::new(ApiContext::new(
            &config.api.base_url,
            std::time::Duration::from_secs(config.api.timeout_secs),
        ));
        let (events_tx, events_rx) = unbounded();

        let app = App {
            link_input: String::new(),
            max_uses_input: String::new(),
            custom_id_input: String::new(),
            expiry_date_input: String::new(),
            duration: EditorState::new(),
            advanced_mode: false,
            date_mode: false,
            focus: FocusField::Link,
            button: ButtonState::new(),
            messages: Vec::new(),
            validation_errors: HashMap::new(),
            limits: FieldLimits::default(),
            link_client: Arc::new(LinkClient::new(ctx.clone())),
            request_seq: 0,
            events_tx,
            events_rx,
        };

        app.spawn_limits_fetch(ConfigClient::new(ctx));
        app
    }

    #[cfg(test)]
    pub(crate) fn new_detached() -> App {
        // Test construction: no runtime, no config fetch dispatched.
        let ctx = Arc::new(ApiContext::new(
            "http://127.0.0.1:0",
            std::time::Duration::from_secs(1),
        ));
        let (events_tx, events_rx) = unbounded();
        App {
            link_input: String::new(),
            max_uses_input: String::new(),
            custom_id_input: String::new(),
            expiry_date_input: String::new(),
            duration: EditorState::new(),
            advanced_mode: false,
            date_mode: false,
            focus: FocusField::Link,
            button: ButtonState::new(),
            messages: Vec::new(),
            validation_errors: HashMap::new(),
            limits: FieldLimits::default(),
            link_client: Arc::new(LinkClient::new(ctx)),
            request_seq: 0,
            events_tx,
            events_rx,
        }
    }

    // ---- Focus cycle ----

    /// 当前可见、可聚焦的元素顺序
    pub fn visible_fields(&self) -> Vec<FocusField> {
        let mut fields = vec![FocusField::Link, FocusField::AdvancedToggle];
        if self.advanced_mode {
            fields.push(FocusField::MaxUses);
            fields.push(FocusField::CustomId);
            fields.push(FocusField::ExpiryToggle);
            fields.push(if self.date_mode {
                FocusField::ExpiryDate
            } else {
                FocusField::Duration
            });
        }
        fields.push(FocusField::Button);
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// 焦点落在被隐藏的字段上时拉回到开关本身
    fn clamp_focus(&mut self) {
        if !self.visible_fields().contains(&self.focus) {
            self.focus = FocusField::AdvancedToggle;
        }
    }

    // ---- Toggles ----

    pub fn toggle_advanced(&mut self) {
        self.advanced_mode = !self.advanced_mode;
        self.clamp_focus();
        self.validate_inputs();
    }

    pub fn toggle_expiry_mode(&mut self) {
        self.date_mode = !self.date_mode;
        // The two expiry fields occupy the same slot in the cycle.
        if self.focus == FocusField::Duration && self.date_mode {
            self.focus = FocusField::ExpiryDate;
        } else if self.focus == FocusField::ExpiryDate && !self.date_mode {
            self.focus = FocusField::Duration;
        }
        self.validate_inputs();
    }

    // ---- Text editing for the free-text fields ----

    /// 向当前编辑字段添加字符，数字字段只收数字，长度超限丢弃
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.focus == FocusField::MaxUses && !c.is_ascii_digit() {
            return;
        }

        let cap = match self.focus {
            FocusField::Link => self.limits.max_link_length,
            FocusField::CustomId => self.limits.max_custom_id_length,
            _ => None,
        };
        let input = match self.focus {
            FocusField::Link => &mut self.link_input,
            FocusField::MaxUses => &mut self.max_uses_input,
            FocusField::CustomId => &mut self.custom_id_input,
            FocusField::ExpiryDate => &mut self.expiry_date_input,
            _ => return,
        };
        if let Some(max) = cap
            && input.chars().count() >= max
        {
            return;
        }

        input.push(c);
        self.after_field_edit();
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        let input = match self.focus {
            FocusField::Link => &mut self.link_input,
            FocusField::MaxUses => &mut self.max_uses_input,
            FocusField::CustomId => &mut self.custom_id_input,
            FocusField::ExpiryDate => &mut self.expiry_date_input,
            _ => return,
        };
        if input.pop().is_none() {
            return;
        }
        self.after_field_edit();
    }

    fn after_field_edit(&mut self) {
        // Editing the link field invalidates a previous result.
        if self.focus == FocusField::Link {
            self.button.link_edited();
        }
        self.validate_inputs();
    }

    // ---- Messages ----

    pub fn message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push(Message {
            kind,
            text: text.into(),
        });
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// 定时任务：按钮回退
    pub fn tick(&mut self, now: Instant) {
        self.button.tick(now);
    }

    pub(crate) fn events_rx(&self) -> Receiver<ApiEvent> {
        self.events_rx.clone()
    }
}
