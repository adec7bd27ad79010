// SPDX-License-Identifier: Apache-2.0

/// Pure helpers for JSON string escapes and UTF-16 code units.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Maps the character following a backslash to the character it stands for.
    ///
    /// Returns `None` for `u` (handled separately) and for anything that is not a
    /// recognised escape.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape('n'), Some('\n'));
    /// ```
    pub fn process_simple_escape(escape_char: char) -> Option<char> {
        match escape_char {
            '"' => Some('"'),
            '/' => Some('/'),
            '\\' => Some('\\'),
            'b' => Some('\u{08}'), // Backspace
            'f' => Some('\u{0C}'), // Form feed
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        }
    }

    /// Value of a hexadecimal digit, either case.
    pub fn hex_digit_value(ch: char) -> Option<u16> {
        match ch {
            '0'..='9' | 'a'..='f' | 'A'..='F' => ch.to_digit(16).map(|digit| digit as u16),
            _ => None,
        }
    }

    /// Check if a UTF-16 code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(unit: u16) -> bool {
        (0xD800..=0xDBFF).contains(&unit)
    }

    /// Check if a UTF-16 code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(unit: u16) -> bool {
        (0xDC00..=0xDFFF).contains(&unit)
    }

    /// Combine a high and low surrogate pair into a single char.
    pub fn combine_surrogate_pair(high: u16, low: u16) -> Option<char> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return None;
        }
        let codepoint = 0x10000 + ((u32::from(high) & 0x3FF) << 10) + (u32::from(low) & 0x3FF);
        char::from_u32(codepoint)
    }
}
