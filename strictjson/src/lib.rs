// SPDX-License-Identifier: Apache-2.0

//! A strict JSON parser with position-accurate diagnostics.
//!
//! The whole input is parsed into a [`Value`] tree, or rejected with a
//! [`ParseError`] describing the first violation:
//!
//! ```
//! let value = strictjson::parse(r#"{"name": "value", "list": [1, 2]}"#).unwrap();
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("value"));
//!
//! let error = strictjson::parse("[23,]").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "Unexpected character ']' in JSON at position 4 (expected a JSON value)"
//! );
//! ```
//!
//! Numbers go through a [`NumberHandler`], which receives the exact matched
//! literal. The default produces `f64`; [`RawHandler`] and [`JsonNumberHandler`]
//! keep the source text, and any `Fn(&str) -> N` closure works too.

mod content_builder;
mod cursor;
mod escape_processor;

mod json_number;
pub use json_number::{JsonNumber, JsonNumberHandler, NumberResult};

mod number_handler;
pub use number_handler::{F64Handler, NumberHandler, RawHandler, RawNumber};

mod options;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};

mod parse_error;
pub use parse_error::{ParseError, Reason};

mod parser;
pub use parser::Parser;

mod value;
pub use value::{Map, Value};

/// Parses `input` with default options: `f64` numbers and a nesting limit of
/// [`DEFAULT_MAX_DEPTH`].
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_with(input, &ParseOptions::new())
}

/// Parses `input` with the given options.
pub fn parse_with<H: NumberHandler>(
    input: &str,
    options: &ParseOptions<H>,
) -> Result<Value<H::Number>, ParseError> {
    Parser::new(input, options).parse()
}
