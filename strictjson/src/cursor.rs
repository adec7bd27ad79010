// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::{ParseError, Reason};

/// The read position over a complete input text.
///
/// `pos` is a byte offset that always sits on a char boundary. Diagnostics report
/// positions in UTF-16 code units, converted lazily by [`Cursor::utf16_position`].
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    pub fn current_pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the next char without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.pos..)?.chars().next()
    }

    /// Consumes and returns the next char.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos = self.pos.saturating_add(ch.len_utf8());
        Some(ch)
    }

    /// Consumes the next char only if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos = self.pos.saturating_add(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consumes the next char only if it is an ASCII digit.
    pub fn eat_digit(&mut self) -> Option<char> {
        match self.peek() {
            Some(ch) if ch.is_ascii_digit() => self.bump(),
            _ => None,
        }
    }

    /// Skips JSON whitespace: space, tab, carriage return and line feed.
    pub fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.pos = self.pos.saturating_add(1);
        }
    }

    /// The text consumed since byte offset `start`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }

    /// Current position counted in UTF-16 code units from the start of input.
    pub fn utf16_position(&self) -> usize {
        self.input.get(..self.pos).map_or(self.pos, |consumed| {
            consumed.chars().map(char::len_utf16).sum()
        })
    }

    /// Builds the diagnostic for whatever sits at the cursor: the character and
    /// its position, or end of input.
    pub fn unexpected(&self, reason: Option<Reason>) -> ParseError {
        let error = match self.peek() {
            Some(ch) => ParseError::unexpected(ch, self.utf16_position(), reason),
            None => ParseError::end_of_input(reason),
        };
        log::debug!("{error}");
        error
    }
}
