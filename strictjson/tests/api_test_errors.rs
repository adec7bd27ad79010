// SPDX-License-Identifier: Apache-2.0

// Diagnostic messages for rejected input

use strictjson::{parse, ParseError, Reason};

fn parse_error(input: &str) -> ParseError {
    match parse(input) {
        Ok(value) => panic!("Expected {input:?} to fail, got: {value:?}"),
        Err(e) => e,
    }
}

macro_rules! error_tests {
    ($($name:ident: $input:expr => $message:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_error_ $name>]() {
                    assert_eq!(parse_error($input).to_string(), $message);
                }
            }
        )*
    };
}

error_tests! {
    empty_input: "" => "Unexpected end of JSON input",
    whitespace_only: " \t\r\n" => "Unexpected end of JSON input",
    not_json: "not json" => "Unexpected character 'o' in JSON at position 1 (expected literal 'null')",
    unknown_start: "x" => "Unexpected character 'x' in JSON at position 0 (expected a JSON value)",
    invalid_literal: "falsy" => "Unexpected character 'y' in JSON at position 4 (expected literal 'false')",
    truncated_literal: "fals" => "Unexpected end of JSON input (expected literal 'false')",
    capitalised_literal: "True" => "Unexpected character 'T' in JSON at position 0 (expected a JSON value)",
    trailing_comma_after_value: "[23]," => "Unexpected character ',' in JSON at position 4",
    trailing_content_after_space: "[23] ," => "Unexpected character ',' in JSON at position 5",
    second_value: "1 2" => "Unexpected character '2' in JSON at position 2",
    leading_zero: "023" => "Unexpected character '2' in JSON at position 1",
    negative_leading_zero: "-023" => "Unexpected character '2' in JSON at position 2",
    bare_fraction: ".1" => "Unexpected character '.' in JSON at position 0 (expected a JSON value)",
    missing_fraction_digit: "1." => "Unexpected end of JSON input (expected a digit)",
    missing_exponent_digit: "1e" => "Unexpected end of JSON input (expected a digit)",
    signed_exponent_without_digit: "1e-x" => "Unexpected character 'x' in JSON at position 3 (expected a digit)",
    lone_minus: "-" => "Unexpected end of JSON input (expected a digit)",
    plus_sign: "+1" => "Unexpected character '+' in JSON at position 0 (expected a JSON value)",
    invalid_escape: r#""foo\xbar""# => "Unexpected character 'x' in JSON at position 5 (invalid escape sequence)",
    unclosed_string: "\"foo" => "Unexpected end of JSON input (unclosed string)",
    unclosed_string_after_escape: r#""foo\""# => "Unexpected end of JSON input (unclosed string)",
    hex_escape_first_digit: r#""foo\uxbar""# => "Unexpected character 'x' in JSON at position 6 (invalid hexadecimal escape sequence)",
    hex_escape_last_digit: r#""foo\u000xbar""# => "Unexpected character 'x' in JSON at position 9 (invalid hexadecimal escape sequence)",
    hex_escape_hits_quote: r#""foo\u000""# => "Unexpected character '\"' in JSON at position 9 (invalid hexadecimal escape sequence)",
    raw_newline_in_string: "\"foo\nbar\"" => "Unexpected character '\\n' in JSON at position 4 (unescaped character in string)",
    raw_nul_in_string: "\"\u{0}\"" => "Unexpected character '\\u0000' in JSON at position 1 (unescaped character in string)",
    array_invalid_token: "[x]" => "Unexpected character 'x' in JSON at position 1 (expected a JSON value)",
    array_leading_comma: "[, 23" => "Unexpected character ',' in JSON at position 1 (expected a JSON value)",
    array_trailing_comma: "[23,]" => "Unexpected character ']' in JSON at position 4 (expected a JSON value)",
    array_double_comma: "[23,,42]" => "Unexpected character ',' in JSON at position 4 (expected a JSON value)",
    array_missing_comma: "[23 42]" => "Unexpected character '4' in JSON at position 4 (expected ',' or ']')",
    unclosed_array: "[23, 42" => "Unexpected end of JSON input (expected ',' or ']')",
    unclosed_empty_array: "[" => "Unexpected end of JSON input (expected a JSON value)",
    mismatched_array_close: "[1}" => "Unexpected character '}' in JSON at position 2 (expected ',' or ']')",
    object_non_string_key: "{ 23, \"bar\": 42" => "Unexpected character '2' in JSON at position 2 (expected object member or '}')",
    object_missing_colon: "{ \"foo\", \"bar\": 42" => "Unexpected character ',' in JSON at position 7 (expected ':')",
    object_trailing_comma: "{\"a\": 1,}" => "Unexpected character '}' in JSON at position 8 (expected object member or '}')",
    object_missing_value: "{\"a\": }" => "Unexpected character '}' in JSON at position 6 (expected a JSON value)",
    unclosed_object: "{ \"foo\" : 23 , \"bar\" : 42" => "Unexpected end of JSON input (expected ',' or '}')",
    unclosed_empty_object: "{" => "Unexpected end of JSON input (expected object member or '}')",
    single_quoted_key: "{'a': 1}" => "Unexpected character ''' in JSON at position 1 (expected object member or '}')",
    backslash_outside_string: "\\" => "Unexpected character '\\\\' in JSON at position 0 (expected a JSON value)",
    non_ascii_trailing: "\"é\" ✅" => "Unexpected character '✅' in JSON at position 4",
    non_breaking_space: "\u{a0}1" => "Unexpected character '\u{a0}' in JSON at position 0 (expected a JSON value)",
}

#[test]
fn test_error_fields_for_unexpected_character() {
    let error = parse_error("[23,]");
    assert_eq!(error.character(), Some(']'));
    assert_eq!(error.position(), Some(4));
    assert_eq!(error.reason(), Some(Reason::ExpectedValue));
    assert!(!error.is_end_of_input());
}

#[test]
fn test_error_fields_at_end_of_input() {
    let error = parse_error("[23, 42");
    assert_eq!(error.character(), None);
    assert_eq!(error.position(), None);
    assert_eq!(error.reason(), Some(Reason::ExpectedArrayEnd));
    assert!(error.is_end_of_input());

    let error = parse_error("");
    assert_eq!(error.reason(), None);
}

#[test]
fn test_position_counts_astral_chars_as_two_units() {
    let error = parse_error("\"😀\" x");
    assert_eq!(error.position(), Some(5));
    assert_eq!(error.to_string(), "Unexpected character 'x' in JSON at position 5");
}

#[test]
fn test_trailing_content_has_no_reason() {
    let error = parse_error("{} x");
    assert_eq!(error.reason(), None);
    assert_eq!(error.position(), Some(3));
}

#[test]
fn test_error_is_boxable() {
    fn run() -> Result<(), Box<dyn std::error::Error>> {
        parse("nope")?;
        Ok(())
    }
    let message = run().unwrap_err().to_string();
    assert_eq!(
        message,
        "Unexpected character 'o' in JSON at position 1 (expected literal 'null')"
    );
}
