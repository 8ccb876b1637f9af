mod action_button;
mod checkbox;
mod duration_field;
mod input_field;
mod message_list;

pub use action_button::ActionButton;
pub use checkbox::Checkbox;
pub use duration_field::DurationField;
pub use input_field::InputField;
pub use message_list::MessageList;
