// Example demonstrating custom number handling

use strictjson::{parse_with, JsonNumberHandler, NumberResult, ParseError, ParseOptions};

/// Fixed-point cents, as a payments system might want.
fn to_cents(literal: &str) -> Option<i64> {
    let (whole, frac) = literal.split_once('.').unwrap_or((literal, ""));
    if frac.len() > 2 || literal.contains(['e', 'E']) {
        return None;
    }
    let negative = whole.starts_with('-');
    let whole: i64 = whole.trim_start_matches('-').parse().ok()?;
    let frac: i64 = format!("{frac:0<2}").parse().ok()?;
    let cents = whole.checked_mul(100)?.checked_add(frac)?;
    Some(if negative { -cents } else { cents })
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"price": 19.99, "discount": -0.5, "weight": 1e3, "id": 98765432109876543210}"#;

    let options = ParseOptions::new().with_number_handler(to_cents);
    let value = parse_with(json, &options)?;
    for (key, member) in value.as_object().into_iter().flatten() {
        println!("cents {key}: {:?}", member.as_number());
    }

    let options = ParseOptions::new().with_number_handler(JsonNumberHandler);
    let value = parse_with(json, &options)?;
    for (key, member) in value.as_object().into_iter().flatten() {
        if let Some(number) = member.as_number() {
            let kind = match number.parsed() {
                NumberResult::Integer(_) => "integer",
                NumberResult::IntegerOverflow => "integer (overflow, raw kept)",
                NumberResult::Float(_) => "float",
            };
            println!("{key}: {number} ({kind}, raw {:?})", number.as_str());
        }
    }
    Ok(())
}
