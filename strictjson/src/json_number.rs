// SPDX-License-Identifier: Apache-2.0

use core::fmt;
use core::str::FromStr;

use crate::number_handler::NumberHandler;

/// Represents the parsed interpretation of a JSON number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberResult {
    /// Integer literal that fits in an `i64`
    Integer(i64),
    /// Integer literal too large for `i64` (use the raw string for exact representation)
    IntegerOverflow,
    /// Literal with a fraction or exponent
    Float(f64),
}

/// A JSON number with both its exact source text and a parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNumber {
    raw: String,
    parsed: NumberResult,
}

impl JsonNumber {
    /// Interprets a literal already accepted by the number grammar.
    pub fn from_literal(literal: &str) -> Self {
        let parsed = if is_integer(literal) {
            match i64::from_str(literal) {
                Ok(val) => NumberResult::Integer(val),
                Err(_) => NumberResult::IntegerOverflow,
            }
        } else {
            NumberResult::Float(f64::from_str(literal).unwrap_or(f64::NAN))
        };
        Self {
            raw: literal.to_owned(),
            parsed,
        }
    }

    pub fn parsed(&self) -> &NumberResult {
        &self.parsed
    }

    /// Get the number as an `i64` if it is an integer literal that fits.
    pub fn as_int(&self) -> Option<i64> {
        match self.parsed {
            NumberResult::Integer(val) => Some(val),
            _ => None,
        }
    }

    /// Get the number as an `f64`, reading the raw text so `-0` keeps its sign.
    pub fn as_f64(&self) -> Option<f64> {
        f64::from_str(&self.raw).ok()
    }

    /// Always available: get the exact string representation.
    /// This preserves full precision and never loses information.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parse the number as a custom type using the exact string representation.
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        T::from_str(&self.raw)
    }

    /// Check if this number represents an integer (no decimal point or exponent).
    pub fn is_integer(&self) -> bool {
        matches!(
            self.parsed,
            NumberResult::Integer(_) | NumberResult::IntegerOverflow
        )
    }

    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }
}

impl AsRef<str> for JsonNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parsed {
            NumberResult::Integer(val) => write!(f, "{val}"),
            NumberResult::Float(val) => write!(f, "{val}"),
            // For overflow show the exact raw string
            NumberResult::IntegerOverflow => f.write_str(&self.raw),
        }
    }
}

/// Number handler producing [`JsonNumber`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonNumberHandler;

impl NumberHandler for JsonNumberHandler {
    type Number = JsonNumber;

    fn handle(&self, literal: &str) -> JsonNumber {
        JsonNumber::from_literal(literal)
    }
}

/// Detects if a number literal is an integer (no decimal point or exponent).
fn is_integer(literal: &str) -> bool {
    !literal.contains(['.', 'e', 'E'])
}
