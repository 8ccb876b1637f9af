//! Pure editing core for the masked duration field
//!
//! The editor is a function from `(EditorState, EditorEvent)` to a new state
//! plus an optional clipboard payload. Nothing here touches the terminal or
//! the system clipboard; the TUI layer feeds events in and applies effects.
//!
//! Editing is overwrite-only. A digit written at the cursor replaces the
//! digit immediately left of it and pulls the cursor left, so entry runs
//! right-to-left toward the start of the field, the way the original
//! right-aligned countdown field behaved. Separators are never written:
//! a cursor adjacent to a colon transparently steps past it.

use super::duration::{DurationText, TEMPLATE_LEN};

/// Non-collapsed selection over the template. `anchor` is where the
/// selection started, `head` is the moving edge (and the cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn contains(&self, i: usize) -> bool {
        (self.start()..self.end()).contains(&i)
    }
}

/// Cursor movement requests. The browser gave these to the original for
/// free; the terminal host routes them through the core so that cursor and
/// selection stay a pure function of the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Home,
    End,
}

/// One input event against the duration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A decimal digit key (0-9).
    Digit(u8),
    Backspace,
    Delete,
    /// Copy the selection without editing.
    Copy,
    /// Zero the selection and yield its previous text.
    Cut,
    /// Insert a copied run of digits ending at the cursor.
    Paste(String),
    Move {
        motion: Motion,
        select: bool,
    },
    SelectAll,
}

/// Editor state: template text, cursor in `[0, 11]`, optional selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub text: DurationText,
    pub cursor: usize,
    pub selection: Option<Selection>,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub state: EditorState,
    /// Text to hand to the clipboard (cut/copy only).
    pub clipboard: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Fresh field: all zeros, cursor at the end of the template.
    pub fn new() -> Self {
        Self {
            text: DurationText::zero(),
            cursor: TEMPLATE_LEN,
            selection: None,
        }
    }

    /// Apply one event, producing the next state and any clipboard payload.
    pub fn apply(&self, event: EditorEvent) -> EditOutcome {
        let mut next = *self;
        let mut clipboard = None;

        match event {
            EditorEvent::Digit(d) => next.write_at_cursor(Some(d)),
            EditorEvent::Backspace => next.write_at_cursor(None),
            EditorEvent::Delete => next.delete_forward(),
            EditorEvent::Copy => clipboard = next.selected_text(),
            EditorEvent::Cut => {
                clipboard = next.selected_text();
                if next.selection.is_some() {
                    next.zero_selection(false);
                }
            }
            EditorEvent::Paste(payload) => next.paste(&payload),
            EditorEvent::Move { motion, select } => next.move_cursor(motion, select),
            EditorEvent::SelectAll => {
                next.selection = Some(Selection {
                    anchor: 0,
                    head: TEMPLATE_LEN,
                });
                next.cursor = TEMPLATE_LEN;
            }
        }

        debug_assert!(next.cursor <= TEMPLATE_LEN);
        EditOutcome {
            state: next,
            clipboard,
        }
    }

    fn selected_text(&self) -> Option<String> {
        self.selection
            .map(|sel| self.text.as_str()[sel.start()..sel.end()].to_string())
    }

    /// Digit entry and backspace share one shape: both overwrite the digit
    /// left of the cursor (backspace writes `0`) and pull the cursor left.
    fn write_at_cursor(&mut self, digit: Option<u8>) {
        if self.selection.is_some() {
            // The typed digit is discarded; the edit is the zeroing itself.
            self.zero_selection(true);
            return;
        }
        if self.cursor == 0 {
            return;
        }

        let mut c = self.cursor;
        if DurationText::is_separator(c - 1) {
            c -= 1;
        }

        let slot = DurationText::digit_slot(c - 1).expect("position left of cursor is a digit");
        self.text.set_digit(slot, digit.unwrap_or(0));
        self.cursor = c - 1;
    }

    fn delete_forward(&mut self) {
        if self.selection.is_some() {
            self.zero_selection(false);
            return;
        }
        if self.cursor == TEMPLATE_LEN {
            return;
        }

        let effective = if DurationText::is_separator(self.cursor) {
            self.cursor + 1
        } else {
            self.cursor
        };
        let slot = DurationText::digit_slot(effective).expect("effective position is a digit");
        self.text.set_digit(slot, 0);
        // Unlike backspace, delete leaves the cursor where it was.
    }

    /// Replace every digit in the selected range with `0`, leaving colons
    /// untouched, then collapse to the closest undisturbed edge: the start
    /// for backspace-like edits, the end for delete-like ones.
    fn zero_selection(&mut self, backspace_like: bool) {
        let sel = match self.selection {
            Some(sel) => sel,
            None => return,
        };

        for i in sel.start()..sel.end() {
            if let Some(slot) = DurationText::digit_slot(i) {
                self.text.set_digit(slot, 0);
            }
        }

        self.cursor = if backspace_like { sel.start() } else { sel.end() };
        self.selection = None;
    }

    /// Paste drops a run of digits into the field ending at the cursor,
    /// filling backward, skipping colons, silently discarding anything that
    /// would overrun the start of the template.
    fn paste(&mut self, payload: &str) {
        if payload.is_empty() || !payload.chars().all(|c| c.is_ascii_digit() || c == ':') {
            return;
        }

        // The paste lands against the trailing edge of any selection.
        let mut cursor = self.selection.map(|s| s.end()).unwrap_or(self.cursor);

        // One colon is stepped over for every three template positions left
        // of the cursor, so at most `cursor - cursor/3` digits can land.
        let cap = cursor - cursor / 3;
        let digits: Vec<u8> = payload
            .bytes()
            .filter(u8::is_ascii_digit)
            .rev()
            .take(cap)
            .collect();

        for b in digits {
            if cursor > 0 && DurationText::is_separator(cursor - 1) {
                cursor -= 1;
            }
            let slot =
                DurationText::digit_slot(cursor - 1).expect("capped walk stays inside the template");
            self.text.set_digit(slot, b - b'0');
            cursor -= 1;
        }

        self.cursor = cursor;
        self.selection = None;
    }

    fn move_cursor(&mut self, motion: Motion, select: bool) {
        if select {
            let anchor = self.selection.map(|s| s.anchor).unwrap_or(self.cursor);
            let head = match motion {
                Motion::Left => self.cursor.saturating_sub(1),
                Motion::Right => (self.cursor + 1).min(TEMPLATE_LEN),
                Motion::Home => 0,
                Motion::End => TEMPLATE_LEN,
            };
            self.cursor = head;
            self.selection = (head != anchor).then_some(Selection { anchor, head });
            return;
        }

        self.cursor = match (motion, self.selection) {
            // Plain arrows collapse a selection to the matching edge.
            (Motion::Left, Some(sel)) => sel.start(),
            (Motion::Right, Some(sel)) => sel.end(),
            (Motion::Left, None) => self.cursor.saturating_sub(1),
            (Motion::Right, None) => (self.cursor + 1).min(TEMPLATE_LEN),
            (Motion::Home, _) => 0,
            (Motion::End, _) => TEMPLATE_LEN,
        };
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, cursor: usize) -> EditorState {
        EditorState {
            text: DurationText::parse(text).unwrap(),
            cursor,
            selection: None,
        }
    }

    fn with_selection(text: &str, anchor: usize, head: usize) -> EditorState {
        EditorState {
            text: DurationText::parse(text).unwrap(),
            cursor: head,
            selection: Some(Selection { anchor, head }),
        }
    }

    fn colons_fixed(s: &EditorState) {
        let t = s.text.as_str();
        assert_eq!(&t[2..3], ":");
        assert_eq!(&t[5..6], ":");
        assert_eq!(&t[8..9], ":");
        assert_eq!(t.len(), 11);
    }

    #[test]
    fn test_digit_overwrites_left_of_cursor() {
        let out = state("00:00:00:00", 11).apply(EditorEvent::Digit(5));
        assert_eq!(out.state.text.as_str(), "00:00:00:05");
        assert_eq!(out.state.cursor, 10);
        colons_fixed(&out.state);
    }

    #[test]
    fn test_digit_entry_runs_right_to_left() {
        let mut s = state("00:00:00:00", 11);
        for d in [1, 2, 3, 4] {
            s = s.apply(EditorEvent::Digit(d)).state;
        }
        // Digits land at 10, 9, then skip the colon at 8: 7, 6.
        assert_eq!(s.text.as_str(), "00:00:43:21");
        assert_eq!(s.cursor, 6);
    }

    #[test]
    fn test_digit_skips_colon() {
        let out = state("00:00:00:00", 9).apply(EditorEvent::Digit(7));
        assert_eq!(out.state.text.as_str(), "00:00:07:00");
        assert_eq!(out.state.cursor, 7);
    }

    #[test]
    fn test_digit_at_start_is_noop() {
        let s = state("12:34:56:78", 0);
        let out = s.apply(EditorEvent::Digit(9));
        assert_eq!(out.state, s);
    }

    #[test]
    fn test_backspace_zeroes_and_moves_left() {
        let out = state("12:34:56:78", 4).apply(EditorEvent::Backspace);
        assert_eq!(out.state.text.as_str(), "12:04:56:78");
        assert_eq!(out.state.cursor, 3);
    }

    #[test]
    fn test_backspace_skips_colon() {
        let out = state("12:34:56:78", 3).apply(EditorEvent::Backspace);
        assert_eq!(out.state.text.as_str(), "10:34:56:78");
        assert_eq!(out.state.cursor, 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let s = state("12:34:56:78", 0);
        let out = s.apply(EditorEvent::Backspace);
        assert_eq!(out.state, s);
    }

    #[test]
    fn test_delete_zeroes_in_place() {
        let out = state("12:34:56:78", 3).apply(EditorEvent::Delete);
        assert_eq!(out.state.text.as_str(), "12:04:56:78");
        assert_eq!(out.state.cursor, 3);
    }

    #[test]
    fn test_delete_skips_colon_forward() {
        let out = state("12:34:56:78", 2).apply(EditorEvent::Delete);
        assert_eq!(out.state.text.as_str(), "12:04:56:78");
        assert_eq!(out.state.cursor, 2);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let s = state("12:34:56:78", 11);
        let out = s.apply(EditorEvent::Delete);
        assert_eq!(out.state, s);
    }

    #[test]
    fn test_selection_zeroed_digit_collapses_to_start() {
        let out = with_selection("12:34:56:78", 1, 7).apply(EditorEvent::Digit(9));
        // The typed digit is discarded; digits in [1, 7) become zero.
        assert_eq!(out.state.text.as_str(), "10:00:06:78");
        assert_eq!(out.state.cursor, 1);
        assert_eq!(out.state.selection, None);
        colons_fixed(&out.state);
    }

    #[test]
    fn test_selection_backspace_collapses_to_start() {
        let out = with_selection("12:34:56:78", 7, 1).apply(EditorEvent::Backspace);
        assert_eq!(out.state.text.as_str(), "10:00:06:78");
        assert_eq!(out.state.cursor, 1);
    }

    #[test]
    fn test_selection_delete_collapses_to_end() {
        let out = with_selection("12:34:56:78", 1, 7).apply(EditorEvent::Delete);
        assert_eq!(out.state.text.as_str(), "10:00:06:78");
        assert_eq!(out.state.cursor, 7);
    }

    #[test]
    fn test_cut_yields_selection_and_collapses_to_end() {
        let out = with_selection("12:34:56:78", 3, 8).apply(EditorEvent::Cut);
        assert_eq!(out.clipboard.as_deref(), Some("34:56"));
        assert_eq!(out.state.text.as_str(), "12:00:00:78");
        assert_eq!(out.state.cursor, 8);
        assert_eq!(out.state.selection, None);
    }

    #[test]
    fn test_cut_without_selection_is_noop() {
        let s = state("12:34:56:78", 5);
        let out = s.apply(EditorEvent::Cut);
        assert_eq!(out.state, s);
        assert_eq!(out.clipboard, None);
    }

    #[test]
    fn test_copy_leaves_state_untouched() {
        let s = with_selection("12:34:56:78", 0, 5);
        let out = s.apply(EditorEvent::Copy);
        assert_eq!(out.clipboard.as_deref(), Some("12:34"));
        assert_eq!(out.state, s);
    }

    #[test]
    fn test_paste_fills_backward_from_end() {
        let out = state("00:00:00:00", 11).apply(EditorEvent::Paste("1234".into()));
        assert_eq!(out.state.text.as_str(), "00:00:12:34");
        assert_eq!(out.state.cursor, 6);
        colons_fixed(&out.state);
    }

    #[test]
    fn test_paste_discards_overflow_past_start() {
        let out = state("00:00:00:00", 11).apply(EditorEvent::Paste("999912345678".into()));
        // Only the trailing eight digits fit.
        assert_eq!(out.state.text.as_str(), "12:34:56:78");
        assert_eq!(out.state.cursor, 0);
    }

    #[test]
    fn test_paste_mid_field_skips_colons() {
        // The run ends just left of the cursor and steps over the colon at 5.
        let out = state("00:00:00:00", 7).apply(EditorEvent::Paste("42".into()));
        assert_eq!(out.state.text.as_str(), "00:04:20:00");
        assert_eq!(out.state.cursor, 4);
    }

    #[test]
    fn test_paste_strips_colons_from_payload() {
        let out = state("00:00:00:00", 11).apply(EditorEvent::Paste("12:34".into()));
        assert_eq!(out.state.text.as_str(), "00:00:12:34");
    }

    #[test]
    fn test_paste_rejects_non_matching_payload() {
        let s = state("12:34:56:78", 11);
        for bad in ["12a4", "1 2", "", "12-34"] {
            let out = s.apply(EditorEvent::Paste(bad.into()));
            assert_eq!(out.state, s, "payload {:?} must be a no-op", bad);
        }
    }

    #[test]
    fn test_paste_uses_selection_end() {
        let out = with_selection("00:00:00:00", 2, 7).apply(EditorEvent::Paste("5".into()));
        assert_eq!(out.state.text.as_str(), "00:00:50:00");
        assert_eq!(out.state.cursor, 6);
        assert_eq!(out.state.selection, None);
    }

    #[test]
    fn test_move_and_select() {
        let mut s = state("12:34:56:78", 11);
        s = s
            .apply(EditorEvent::Move {
                motion: Motion::Home,
                select: false,
            })
            .state;
        assert_eq!(s.cursor, 0);

        s = s
            .apply(EditorEvent::Move {
                motion: Motion::Right,
                select: true,
            })
            .state;
        s = s
            .apply(EditorEvent::Move {
                motion: Motion::Right,
                select: true,
            })
            .state;
        assert_eq!(s.selection, Some(Selection { anchor: 0, head: 2 }));

        // Plain arrow collapses to the matching edge.
        s = s
            .apply(EditorEvent::Move {
                motion: Motion::Left,
                select: false,
            })
            .state;
        assert_eq!(s.cursor, 0);
        assert_eq!(s.selection, None);
    }

    #[test]
    fn test_select_all_then_cut_clears_field() {
        let out = state("12:34:56:78", 4)
            .apply(EditorEvent::SelectAll)
            .state
            .apply(EditorEvent::Cut);
        assert_eq!(out.clipboard.as_deref(), Some("12:34:56:78"));
        assert_eq!(out.state.text.as_str(), "00:00:00:00");
        assert_eq!(out.state.cursor, 11);
    }

    #[test]
    fn test_colons_invariant_under_event_storm() {
        let events = [
            EditorEvent::Digit(9),
            EditorEvent::Backspace,
            EditorEvent::Delete,
            EditorEvent::Paste("987654321".into()),
            EditorEvent::SelectAll,
            EditorEvent::Cut,
            EditorEvent::Digit(1),
            EditorEvent::Move {
                motion: Motion::Home,
                select: false,
            },
            EditorEvent::Delete,
        ];
        let mut s = EditorState::new();
        for e in events {
            s = s.apply(e).state;
            colons_fixed(&s);
        }
    }
}
