// Example demonstrating the parse API and its diagnostics

use strictjson::{parse, ParseError, Value};

fn describe(value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                println!("{pad}{key}: {}", member.kind());
                describe(member, indent + 2);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                println!("{pad}[{i}]: {}", item.kind());
                describe(item, indent + 2);
            }
        }
        Value::String(s) => println!("{pad}{s:?}"),
        Value::Number(n) => println!("{pad}{n}"),
        Value::Bool(b) => println!("{pad}{b}"),
        Value::Null => println!("{pad}null"),
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42, "flag": true, "list": [1.5, null]}"#;
    println!("Input: {json}");
    let value = parse(json)?;
    describe(&value, 2);

    println!();
    for bad in ["[23,]", "{\"a\" 1}", "\"unterminated", "023", "[1] x"] {
        match parse(bad) {
            Ok(_) => println!("{bad:>14} => unexpectedly valid"),
            Err(e) => println!("{bad:>14} => {e}"),
        }
    }
    Ok(())
}
