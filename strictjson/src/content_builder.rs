// SPDX-License-Identifier: Apache-2.0

//! Accumulates the decoded content of a JSON string.
//!
//! Literal characters are appended as-is. `\u` escapes arrive as individual UTF-16
//! code units; a high surrogate is held back until the next unit shows whether it
//! completes a pair.

use crate::escape_processor::EscapeProcessor;

#[derive(Debug, Default)]
pub struct StringBuilder {
    buffer: String,
    pending_high_surrogate: Option<u16>,
}

impl StringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal character, or the result of a simple escape.
    pub fn push_char(&mut self, ch: char) {
        self.flush_pending();
        self.buffer.push(ch);
    }

    /// Append one UTF-16 code unit from a `\uXXXX` escape.
    pub fn push_code_unit(&mut self, unit: u16) {
        if let Some(high) = self.pending_high_surrogate.take() {
            if let Some(ch) = EscapeProcessor::combine_surrogate_pair(high, unit) {
                self.buffer.push(ch);
                return;
            }
            self.buffer.push(char::REPLACEMENT_CHARACTER);
        }

        if EscapeProcessor::is_high_surrogate(unit) {
            self.pending_high_surrogate = Some(unit);
        } else {
            // Lone low surrogates have no char and fall back to the replacement char
            let ch = char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER);
            self.buffer.push(ch);
        }
    }

    pub fn finish(mut self) -> String {
        self.flush_pending();
        self.buffer
    }

    fn flush_pending(&mut self) {
        if self.pending_high_surrogate.take().is_some() {
            self.buffer.push(char::REPLACEMENT_CHARACTER);
        }
    }
}
