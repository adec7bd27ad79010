// SPDX-License-Identifier: Apache-2.0

use core::fmt;
use core::str::FromStr;

/// Converts a matched numeric literal into the caller's number representation.
///
/// The parser hands over exactly the source text matched by the number grammar:
/// sign, digits, fraction and exponent, without surrounding whitespace.
///
/// Any `Fn(&str) -> N` closure is a handler:
/// ```
/// let value = strictjson::parse_with(
///     "[1, 2.5]",
///     &strictjson::ParseOptions::new().with_number_handler(|literal: &str| literal.len()),
/// )
/// .unwrap();
/// assert_eq!(value.get_index(1).and_then(|v| v.as_number()), Some(&3));
/// ```
pub trait NumberHandler {
    type Number;

    fn handle(&self, literal: &str) -> Self::Number;
}

impl<F, N> NumberHandler for F
where
    F: Fn(&str) -> N,
{
    type Number = N;

    fn handle(&self, literal: &str) -> N {
        self(literal)
    }
}

/// The default handler: standard double-precision parsing.
///
/// `-0` stays negative zero and out-of-range magnitudes become infinities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct F64Handler;

impl NumberHandler for F64Handler {
    type Number = f64;

    fn handle(&self, literal: &str) -> f64 {
        // Every literal accepted by the number grammar is valid float syntax
        f64::from_str(literal).unwrap_or(f64::NAN)
    }
}

/// Keeps each number as its exact source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawHandler;

impl NumberHandler for RawHandler {
    type Number = RawNumber;

    fn handle(&self, literal: &str) -> RawNumber {
        RawNumber(literal.to_owned())
    }
}

/// A number literal preserved verbatim, for arbitrary-precision consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawNumber(String);

impl RawNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the number as a custom type using the exact string representation.
    /// This allows using external libraries like BigDecimal, arbitrary precision, etc.
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        T::from_str(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RawNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
