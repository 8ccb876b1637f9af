//! Tri-state action button
//!
//! One button multiplexes "submit a new link" and "copy the last result".
//! The mode decides both the label and what a click means:
//!
//! ```text
//! Create ──(valid click, 200)──> ReadyToCopy ──(click)──> Copied
//!    ^                                ^                      │
//!    │                                └──(2000ms, no click)──┘
//!    └────────(link field edited)── ReadyToCopy | Copied
//! ```
//!
//! The timed revert is deadline-based rather than timer-callback-based:
//! entering `Copied` records an `Instant` and the event-loop tick applies the
//! revert only while the mode is still `Copied`, so a revert can never
//! clobber a state the user has since moved away from. Re-clicking while
//! `Copied` overwrites the deadline and keeps the label up.

use std::time::{Duration, Instant};

/// How long the "Copied!" confirmation stays before falling back to "Copy".
pub const COPIED_REVERT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonMode {
    #[default]
    Create,
    ReadyToCopy,
    Copied,
}

impl ButtonMode {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonMode::Create => "Shorten",
            ButtonMode::ReadyToCopy => "Copy",
            ButtonMode::Copied => "Copied!",
        }
    }

    /// Whether a click in this mode means "copy the field contents".
    pub fn is_copy_like(&self) -> bool {
        matches!(self, ButtonMode::ReadyToCopy | ButtonMode::Copied)
    }
}

/// Button mode plus the pending revert deadline, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    mode: ButtonMode,
    revert_at: Option<Instant>,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    /// A creation request came back with a short link.
    pub fn creation_succeeded(&mut self) {
        self.mode = ButtonMode::ReadyToCopy;
        self.revert_at = None;
    }

    /// The field contents were copied; show the confirmation and schedule
    /// the fall-back. Clicking again just pushes the deadline out.
    pub fn copied(&mut self, now: Instant) {
        self.mode = ButtonMode::Copied;
        self.revert_at = Some(now + COPIED_REVERT_DELAY);
    }

    /// The user edited the link field: any prior result is stale.
    pub fn link_edited(&mut self) {
        self.mode = ButtonMode::Create;
        self.revert_at = None;
    }

    /// Apply the timed `Copied -> ReadyToCopy` revert. Returns `true` when a
    /// transition happened (the UI needs a redraw).
    pub fn tick(&mut self, now: Instant) -> bool {
        match (self.mode, self.revert_at) {
            (ButtonMode::Copied, Some(deadline)) if now >= deadline => {
                self.mode = ButtonMode::ReadyToCopy;
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}
