//! Form core: everything that can be reasoned about without a terminal
//!
//! - `duration` / `editor`: the masked `DD:HH:MM:SS` field and its pure
//!   editing transitions
//! - `button`: the tri-state submit/copy controller
//! - `validation`: the submission gate and message composition
//! - `request`: the creation payload

pub mod button;
pub mod duration;
pub mod editor;
pub mod request;
pub mod validation;

pub use button::{ButtonMode, ButtonState, COPIED_REVERT_DELAY};
pub use duration::DurationText;
pub use editor::{EditOutcome, EditorEvent, EditorState, Motion, Selection};
pub use request::CreationRequest;
pub use validation::{FieldGroup, FieldLimits, FormFields};
