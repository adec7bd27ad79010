// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// The grammatical expectation that was violated when a [`ParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// No value could start at this character.
    ExpectedValue,
    /// A `true`, `false` or `null` keyword did not match.
    ExpectedLiteral(&'static str),
    /// A sign, fraction point or exponent marker was not followed by a digit.
    ExpectedDigit,
    /// Input ended inside a string.
    UnclosedString,
    /// A raw control character (U+0000 to U+001F) appeared inside a string.
    UnescapedCharacter,
    /// A backslash was followed by an unknown escape character.
    InvalidEscape,
    /// A `\u` escape was not followed by four hex digits.
    InvalidHexEscape,
    /// An object member must start with a quoted key.
    ExpectedMember,
    /// An object key must be followed by a colon.
    ExpectedColon,
    /// An array element must be followed by `,` or `]`.
    ExpectedArrayEnd,
    /// An object member must be followed by `,` or `}`.
    ExpectedObjectEnd,
    /// A container opened beyond the configured nesting limit.
    MaxDepthExceeded,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::ExpectedValue => f.write_str("expected a JSON value"),
            Reason::ExpectedLiteral(literal) => write!(f, "expected literal '{literal}'"),
            Reason::ExpectedDigit => f.write_str("expected a digit"),
            Reason::UnclosedString => f.write_str("unclosed string"),
            Reason::UnescapedCharacter => f.write_str("unescaped character in string"),
            Reason::InvalidEscape => f.write_str("invalid escape sequence"),
            Reason::InvalidHexEscape => f.write_str("invalid hexadecimal escape sequence"),
            Reason::ExpectedMember => f.write_str("expected object member or '}'"),
            Reason::ExpectedColon => f.write_str("expected ':'"),
            Reason::ExpectedArrayEnd => f.write_str("expected ',' or ']'"),
            Reason::ExpectedObjectEnd => f.write_str("expected ',' or '}'"),
            Reason::MaxDepthExceeded => f.write_str("maximum nesting depth exceeded"),
        }
    }
}

/// Errors that can occur during JSON parsing.
///
/// Every grammar or lexical violation produces one of these, raised at the first
/// offending character. When the input ran out, `character` and `position` are
/// both `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    character: Option<char>,
    position: Option<usize>,
    reason: Option<Reason>,
}

impl ParseError {
    /// An unexpected character at `position` (counted in UTF-16 code units from the start of input).
    pub fn unexpected(character: char, position: usize, reason: Option<Reason>) -> Self {
        Self {
            character: Some(character),
            position: Some(position),
            reason,
        }
    }

    /// The input ended before the grammar was satisfied.
    pub fn end_of_input(reason: Option<Reason>) -> Self {
        Self {
            character: None,
            position: None,
            reason,
        }
    }

    /// The offending character, or `None` at end of input.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Position of the offending character, or `None` at end of input.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn reason(&self) -> Option<Reason> {
        self.reason
    }

    pub fn is_end_of_input(&self) -> bool {
        self.character.is_none()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.character, self.position) {
            (Some(ch), Some(pos)) => write!(
                f,
                "Unexpected character '{}' in JSON at position {pos}",
                EscapedChar(ch)
            )?,
            _ => f.write_str("Unexpected end of JSON input")?,
        }
        if let Some(reason) = self.reason {
            write!(f, " ({reason})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Renders a character for a diagnostic: control characters and backslash are
/// escaped, everything else is written literally.
pub struct EscapedChar(pub char);

impl fmt::Display for EscapedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            '\n' => f.write_str("\\n"),
            '\r' => f.write_str("\\r"),
            '\t' => f.write_str("\\t"),
            '\u{08}' => f.write_str("\\b"),
            '\u{0C}' => f.write_str("\\f"),
            '\\' => f.write_str("\\\\"),
            ch if ch <= '\u{1F}' => write!(f, "\\u{:04x}", ch as u32),
            ch => write!(f, "{ch}"),
        }
    }
}
