// SPDX-License-Identifier: Apache-2.0

//! UTF-16 escape handling: `\u` escapes are code units, and consecutive escapes
//! that form a surrogate pair decode to a single character.

use strictjson::{parse, Value};

fn parse_str(json: &str) -> String {
    match parse(json) {
        Ok(Value::String(s)) => s,
        other => panic!("Expected string for {json:?}, got {other:?}"),
    }
}

#[test]
fn test_basic_surrogate_pair() {
    assert_eq!(parse_str(r#""\uD801\uDC37""#), "\u{10437}");
    assert_eq!(parse_str(r#""\ud83d\ude00""#), "😀");
}

#[test]
fn test_multiple_surrogate_pairs() {
    assert_eq!(parse_str(r#""\uD801\uDC37\uD801\uDC37""#), "\u{10437}\u{10437}");
}

#[test]
fn test_surrogate_pair_among_text() {
    assert_eq!(parse_str(r#""a\uD83D\uDE00b\u0041""#), "a😀bA");
}

#[test]
fn test_surrogate_pair_in_key() {
    let value = parse(r#"{"\uD83D\uDE00": 1}"#).unwrap();
    assert_eq!(value.get("😀"), Some(&Value::Number(1.0)));
}

#[test]
fn test_lone_high_surrogate() {
    assert_eq!(parse_str(r#""\uD801""#), "\u{FFFD}");
    assert_eq!(parse_str(r#""\uD801x""#), "\u{FFFD}x");
    // Broken by a simple escape
    assert_eq!(parse_str(r#""\uD801\n\uDC37""#), "\u{FFFD}\n\u{FFFD}");
}

#[test]
fn test_lone_low_surrogate() {
    assert_eq!(parse_str(r#""\uDC37""#), "\u{FFFD}");
    assert_eq!(parse_str(r#""\uDC37\uD801""#), "\u{FFFD}\u{FFFD}");
}

#[test]
fn test_high_surrogate_followed_by_bmp_escape() {
    assert_eq!(parse_str(r#""\uD801\u0041""#), "\u{FFFD}A");
}

#[test]
fn test_raw_astral_characters_need_no_escapes() {
    assert_eq!(parse_str("\"𐐷😀\""), "\u{10437}😀");
}

#[test]
fn test_malformed_escape_after_high_surrogate() {
    let error = parse(r#""\uD801\uZZZZ""#).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Unexpected character 'Z' in JSON at position 9 (invalid hexadecimal escape sequence)"
    );
}
