// SPDX-License-Identifier: Apache-2.0

use crate::content_builder::StringBuilder;
use crate::cursor::Cursor;
use crate::escape_processor::EscapeProcessor;
use crate::number_handler::NumberHandler;
use crate::options::ParseOptions;
use crate::parse_error::{ParseError, Reason};
use crate::value::{Map, Value};

/// A recursive-descent parser over one complete input text.
///
/// Each production reads from the shared [`Cursor`] and either returns its value
/// with the cursor advanced past it, or fails on the first violation.
// Lifetime 'a is the input lifetime
// lifetime 'o is the options (and number handler) lifetime
pub struct Parser<'a, 'o, H> {
    cursor: Cursor<'a>,
    number_handler: &'o H,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a, 'o, H: NumberHandler> Parser<'a, 'o, H> {
    pub fn new(input: &'a str, options: &'o ParseOptions<H>) -> Self {
        Parser {
            cursor: Cursor::new(input),
            number_handler: options.number_handler(),
            max_depth: options.max_depth(),
            depth: 0,
        }
    }

    /// Parses a single value and requires nothing but whitespace after it.
    pub fn parse(mut self) -> Result<Value<H::Number>, ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Err(self.cursor.unexpected(None));
        }

        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected(None));
        }
        log::trace!("parsed {} from {} bytes", value.kind(), self.cursor.current_pos());
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value<H::Number>, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('{') => self.parse_object().map(Value::Object),
            Some('[') => self.parse_array().map(Value::Array),
            Some('"') => self.parse_string().map(Value::String),
            Some('t') => self.parse_literal("true").map(|()| Value::Bool(true)),
            Some('f') => self.parse_literal("false").map(|()| Value::Bool(false)),
            Some('n') => self.parse_literal("null").map(|()| Value::Null),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number().map(Value::Number),
            _ => Err(self.cursor.unexpected(Some(Reason::ExpectedValue))),
        }
    }

    fn parse_literal(&mut self, literal: &'static str) -> Result<(), ParseError> {
        for expected in literal.chars() {
            if !self.cursor.eat(expected) {
                return Err(self.cursor.unexpected(Some(Reason::ExpectedLiteral(literal))));
            }
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<H::Number, ParseError> {
        let start = self.cursor.current_pos();
        self.cursor.eat('-');
        match self.cursor.eat_digit() {
            None => return Err(self.cursor.unexpected(Some(Reason::ExpectedDigit))),
            // A leading zero ends the integer part
            Some('0') => {}
            Some(_) => while self.cursor.eat_digit().is_some() {},
        }
        self.read_fraction()?;
        self.read_exponent()?;

        let literal = self.cursor.slice_from(start);
        Ok(self.number_handler.handle(literal))
    }

    fn read_fraction(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat('.') {
            self.read_digits()?;
        }
        Ok(())
    }

    fn read_exponent(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat('e') || self.cursor.eat('E') {
            if !self.cursor.eat('-') {
                self.cursor.eat('+');
            }
            self.read_digits()?;
        }
        Ok(())
    }

    /// One or more digits.
    fn read_digits(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat_digit().is_none() {
            return Err(self.cursor.unexpected(Some(Reason::ExpectedDigit)));
        }
        while self.cursor.eat_digit().is_some() {}
        Ok(())
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.cursor.eat('"');
        let mut content = StringBuilder::new();
        loop {
            match self.cursor.peek() {
                Some('"') => {
                    self.cursor.bump();
                    return Ok(content.finish());
                }
                None => return Err(self.cursor.unexpected(Some(Reason::UnclosedString))),
                Some(ch) if ch <= '\u{1F}' => {
                    return Err(self.cursor.unexpected(Some(Reason::UnescapedCharacter)))
                }
                Some('\\') => {
                    self.cursor.bump();
                    self.parse_escape(&mut content)?;
                }
                Some(ch) => {
                    self.cursor.bump();
                    content.push_char(ch);
                }
            }
        }
    }

    /// Decodes the escape following a backslash.
    fn parse_escape(&mut self, content: &mut StringBuilder) -> Result<(), ParseError> {
        let simple = self.cursor.peek().and_then(EscapeProcessor::process_simple_escape);
        if let Some(ch) = simple {
            self.cursor.bump();
            content.push_char(ch);
            return Ok(());
        }
        if !self.cursor.eat('u') {
            return Err(self.cursor.unexpected(Some(Reason::InvalidEscape)));
        }

        let mut unit = 0u16;
        for _ in 0..4 {
            let digit = self.cursor.peek().and_then(EscapeProcessor::hex_digit_value);
            let Some(digit) = digit else {
                return Err(self.cursor.unexpected(Some(Reason::InvalidHexEscape)));
            };
            self.cursor.bump();
            unit = (unit << 4) | digit;
        }
        content.push_code_unit(unit);
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Vec<Value<H::Number>>, ParseError> {
        self.enter_container()?;
        self.cursor.eat('[');
        let mut items = Vec::new();
        self.cursor.skip_whitespace();
        if self.cursor.eat(']') {
            self.exit_container();
            return Ok(items);
        }

        loop {
            items.push(self.parse_value()?);
            self.cursor.skip_whitespace();
            if !self.cursor.eat(',') {
                break;
            }
        }
        if !self.cursor.eat(']') {
            return Err(self.cursor.unexpected(Some(Reason::ExpectedArrayEnd)));
        }
        self.exit_container();
        Ok(items)
    }

    fn parse_object(&mut self) -> Result<Map<H::Number>, ParseError> {
        self.enter_container()?;
        self.cursor.eat('{');
        let mut members = Map::new();
        self.cursor.skip_whitespace();
        if self.cursor.eat('}') {
            self.exit_container();
            return Ok(members);
        }

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some('"') {
                return Err(self.cursor.unexpected(Some(Reason::ExpectedMember)));
            }
            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            if !self.cursor.eat(':') {
                return Err(self.cursor.unexpected(Some(Reason::ExpectedColon)));
            }
            let value = self.parse_value()?;
            // Duplicate keys: last one wins
            members.insert(key, value);
            self.cursor.skip_whitespace();
            if !self.cursor.eat(',') {
                break;
            }
        }
        if !self.cursor.eat('}') {
            return Err(self.cursor.unexpected(Some(Reason::ExpectedObjectEnd)));
        }
        self.exit_container();
        Ok(members)
    }

    /// Checked before the opening bracket is consumed, so a depth error points at it.
    fn enter_container(&mut self) -> Result<(), ParseError> {
        let new_depth = self.depth.saturating_add(1);
        if self.max_depth.is_some_and(|max| new_depth > max) {
            return Err(self.cursor.unexpected(Some(Reason::MaxDepthExceeded)));
        }
        log::trace!("enter container at byte {}, depth {new_depth}", self.cursor.current_pos());
        self.depth = new_depth;
        Ok(())
    }

    fn exit_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
