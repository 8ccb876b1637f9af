//! Fixed-template duration text (`DD:HH:MM:SS`)
//!
//! The field is always exactly 11 bytes: four 2-digit groups separated by
//! colons at indices 2, 5 and 8. There is no partial state; "empty" is
//! `00:00:00:00`. Digits are not range-checked (`99:99:99:99` is a valid
//! template even though it is an odd duration).

use std::fmt;

use crate::errors::{Result, ShortformError};

/// Total template length, and the only meaningful end-of-field cursor slot.
pub const TEMPLATE_LEN: usize = 11;

/// Indices that hold a literal `:` and are never edited.
pub const SEPARATOR_INDICES: [usize; 3] = [2, 5, 8];

/// Number of editable digit slots in the template.
pub const DIGIT_SLOTS: usize = 8;

const ZERO: [u8; TEMPLATE_LEN] = *b"00:00:00:00";

/// An 11-byte `DD:HH:MM:SS` string with the template invariants enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationText {
    bytes: [u8; TEMPLATE_LEN],
}

impl Default for DurationText {
    fn default() -> Self {
        Self::zero()
    }
}

impl DurationText {
    /// The absent value, `00:00:00:00`.
    pub fn zero() -> Self {
        Self { bytes: ZERO }
    }

    /// Parse an exact 11-character template string.
    ///
    /// Rejects anything that is not four 2-digit groups with colons at the
    /// fixed separator positions.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes: [u8; TEMPLATE_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ShortformError::duration(format!("expected 11 characters, got {:?}", s)))?;

        for (i, b) in bytes.iter().enumerate() {
            let ok = if Self::is_separator(i) {
                *b == b':'
            } else {
                b.is_ascii_digit()
            };
            if !ok {
                return Err(ShortformError::duration(format!(
                    "invalid character {:?} at position {}",
                    *b as char, i
                )));
            }
        }

        Ok(Self { bytes })
    }

    /// Whether template index `i` holds a literal colon.
    pub fn is_separator(i: usize) -> bool {
        SEPARATOR_INDICES.contains(&i)
    }

    /// Map a template index to its digit slot (0..8), or `None` for colons.
    ///
    /// Every group of three template positions contains one separator, so the
    /// slot is the index minus one per full group passed.
    pub fn digit_slot(i: usize) -> Option<usize> {
        if i >= TEMPLATE_LEN || Self::is_separator(i) {
            return None;
        }
        Some(i - i / 3)
    }

    /// Map a digit slot (0..8) back to its template index.
    pub fn slot_index(slot: usize) -> usize {
        debug_assert!(slot < DIGIT_SLOTS);
        slot + slot / 2
    }

    /// Character at template index `i`.
    pub fn char_at(&self, i: usize) -> char {
        self.bytes[i] as char
    }

    /// Digit value (0-9) in slot `slot`.
    pub fn digit(&self, slot: usize) -> u8 {
        self.bytes[Self::slot_index(slot)] - b'0'
    }

    /// Overwrite digit slot `slot` with `d` (0-9).
    pub fn set_digit(&mut self, slot: usize, d: u8) {
        debug_assert!(d < 10);
        self.bytes[Self::slot_index(slot)] = b'0' + d;
    }

    pub fn as_str(&self) -> &str {
        // Invariant: all bytes are ASCII digits or ':'
        std::str::from_utf8(&self.bytes).expect("template is always ASCII")
    }

    /// The four field values `(days, hours, minutes, seconds)` as typed.
    pub fn fields(&self) -> (u64, u64, u64, u64) {
        let group = |slot: usize| (self.digit(slot) * 10 + self.digit(slot + 1)) as u64;
        (group(0), group(2), group(4), group(6))
    }

    /// Semantic value in seconds: `DD*86400 + HH*3600 + MM*60 + SS`.
    pub fn total_seconds(&self) -> u64 {
        let (d, h, m, s) = self.fields();
        ((d * 24 + h) * 60 + m) * 60 + s
    }

    /// Semantic value in milliseconds, the unit the creation request carries.
    pub fn total_millis(&self) -> u64 {
        self.total_seconds() * 1000
    }

    /// Whether this is the absent value (`00:00:00:00`).
    pub fn is_zero(&self) -> bool {
        self.bytes == ZERO
    }
}

impl fmt::Display for DurationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
