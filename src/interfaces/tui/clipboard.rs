//! System clipboard access (best effort)
//!
//! Clipboard failures are never surfaced to the form; a denied or absent
//! clipboard degrades to a silent no-op, logged at debug level.

use tracing::debug;

/// Write text to the system clipboard. Returns whether it took.
pub fn write_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                debug!("clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            debug!("clipboard unavailable: {}", e);
            false
        }
    }
}

/// Read text from the system clipboard, if there is any.
pub fn read_text() -> Option<String> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("clipboard read failed: {}", e);
                None
            }
        },
        Err(e) => {
            debug!("clipboard unavailable: {}", e);
            None
        }
    }
}
