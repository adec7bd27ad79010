// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use strictjson::{parse_with, NumberHandler, ParseError, ParseOptions, RawHandler, Value};

/// Check that a document is strictly valid JSON.
#[derive(Parser, Debug)]
#[command(name = "jsoncheck", version)]
struct Args {
    /// File to check; reads standard input when omitted
    file: Option<PathBuf>,

    /// Keep numbers as their source text instead of converting to f64
    #[arg(long)]
    raw_numbers: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, conflicts_with = "no_depth_limit")]
    max_depth: Option<usize>,

    /// Disable the nesting depth limit
    #[arg(long)]
    no_depth_limit: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn summarize<N>(value: &Value<N>) -> String {
    match value {
        Value::Array(items) => format!("array with {} elements", items.len()),
        Value::Object(members) => format!("object with {} members", members.len()),
        other => other.kind().to_string(),
    }
}

fn check<H: NumberHandler>(input: &str, options: &ParseOptions<H>) -> Result<String, ParseError> {
    parse_with(input, options).map(|value| summarize(&value))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            let source = args
                .file
                .as_ref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("Error: Unable to read '{source}': {e}");
            return ExitCode::from(2);
        }
    };
    log::info!("checking {} bytes", input.len());

    let mut options = ParseOptions::new();
    if let Some(depth) = args.max_depth {
        options = options.with_max_depth(depth);
    }
    if args.no_depth_limit {
        options = options.without_depth_limit();
    }

    let result = if args.raw_numbers {
        check(&input, &options.with_number_handler(RawHandler))
    } else {
        check(&input, &options)
    };

    match result {
        Ok(summary) => {
            println!("ok: {summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries() {
        let options = ParseOptions::new();
        assert_eq!(check("[1, 2]", &options), Ok("array with 2 elements".to_string()));
        assert_eq!(check("{\"a\": 1}", &options), Ok("object with 1 members".to_string()));
        assert_eq!(check(" null ", &options), Ok("null".to_string()));
        assert!(check("[1,]", &options).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["jsoncheck", "--raw-numbers", "--max-depth", "4", "in.json"])
            .unwrap();
        assert!(args.raw_numbers);
        assert_eq!(args.max_depth, Some(4));
        assert_eq!(args.file, Some(PathBuf::from("in.json")));

        assert!(Args::try_parse_from(["jsoncheck", "--max-depth", "4", "--no-depth-limit"]).is_err());
    }
}
