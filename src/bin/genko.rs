//! Inspect how `genko` prepares text for the manuscript grid.
//!
//! Usage:
//!   cargo run --features cli --bin genko -- [text_path|-] [--digits-per-box <n>]

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use genko::{prepare_paragraph, split_paragraphs, Token};

const DEFAULT_DIGITS_PER_BOX: usize = 2;

struct Args {
    input_path: String,
    digits_per_box: usize,
}

fn main() -> ExitCode {
    match run(env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let args = parse_args(args)?;
    let text = read_input(&args.input_path)?;
    for (index, paragraph) in split_paragraphs(&text).enumerate() {
        let tokens = prepare_paragraph(paragraph, args.digits_per_box);
        println!("paragraph {} ({} tokens)", index, tokens.len());
        for token in &tokens {
            println!("  {}", describe(token));
        }
    }
    Ok(())
}

fn describe(token: &Token) -> String {
    match token {
        Token::Char(' ') => "space".to_string(),
        Token::Char('\t') => "tab".to_string(),
        Token::Char(ch) => format!("char {:?}", ch),
        Token::Ellipsis => "ellipsis".to_string(),
        Token::Digits(group) => format!("digits {:?}", group.as_str()),
    }
}

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("read stdin: {}", e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| format!("read {}: {}", path, e))
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        return Err("help requested".to_string());
    }

    let has_positional_input = args.get(1).is_some_and(|v| !v.starts_with("--"));
    let mut cfg = Args {
        input_path: if has_positional_input {
            args[1].clone()
        } else {
            "-".to_string()
        },
        digits_per_box: DEFAULT_DIGITS_PER_BOX,
    };

    let mut i = if has_positional_input { 2usize } else { 1usize };
    while i < args.len() {
        match args[i].as_str() {
            "--digits-per-box" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--digits-per-box requires a value".to_string())?;
                cfg.digits_per_box = v
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("invalid --digits-per-box value '{}'", v))?;
                i += 2;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(cfg)
}

fn help_text() -> &'static str {
    r#"genko - print the tokens prepared for each paragraph

USAGE:
  genko [text_path|-] [options]

OPTIONS:
  --digits-per-box <n>   digits packed into one box (default: 2)
  -h, --help             show this help"#
}
