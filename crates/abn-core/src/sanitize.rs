//! Input sanitization: charset check and whitespace removal.

use crate::error::{AbnError, Result};
use crate::options::GROUP_ABN_LEN;

/// Digits retained beyond the longest accepted form. One extra slot is
/// enough to tell "too long" apart from "exactly 14".
const BUFFER_LEN: usize = GROUP_ABN_LEN + 1;

/// ASCII digits pulled out of raw input, whitespace removed.
///
/// Only the first 15 digits are kept; `len()` still reports the full count
/// so oversized input is rejected by length without a proportional buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    buf: [u8; BUFFER_LEN],
    len: usize,
}

impl Digits {
    /// Total digit count seen in the input.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Retained digit values (0-9), at most 15 of them.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len.min(BUFFER_LEN)]
    }

    fn push(&mut self, digit: u8) {
        if self.len < BUFFER_LEN {
            self.buf[self.len] = digit;
        }
        self.len = self.len.saturating_add(1);
    }
}

/// Strip whitespace and reject anything that is not an ASCII digit.
///
/// # Errors
///
/// - [`AbnError::EmptyInput`] when the text has no non-whitespace character.
/// - [`AbnError::InvalidCharacters`] for the first disallowed character,
///   with its character position in `raw`.
pub fn sanitize(raw: &str) -> Result<Digits> {
    let mut digits = Digits {
        buf: [0; BUFFER_LEN],
        len: 0,
    };
    for (position, ch) in raw.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if ch.is_ascii_digit() {
            digits.push(ch as u8 - b'0');
        } else {
            return Err(AbnError::InvalidCharacters {
                found: ch,
                position,
            });
        }
    }
    if digits.is_empty() {
        return Err(AbnError::EmptyInput);
    }
    Ok(digits)
}
