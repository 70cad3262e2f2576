use std::env;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use genko_render::{CharacterGoal, LayoutConfig, SheetPolicy};
use genko_render_web::{build_html, build_payload};
use serde::Deserialize;

const DEFAULT_OUT_PATH: &str = "target/web-preview/index.html";
const MAX_WIDTH: usize = 400;
const MAX_MIN_ROWS: usize = 1000;
const MAX_GOAL_CHARS: usize = MAX_WIDTH * MAX_MIN_ROWS;

#[derive(Clone, Debug, PartialEq)]
struct Args {
    text_path: String,
    out_path: String,
    json: bool,
    config_path: Option<String>,
    width: Option<usize>,
    indent_boxes: Option<usize>,
    count_spaces: Option<bool>,
    digits_per_box: Option<usize>,
    min_chars: Option<usize>,
    max_chars: Option<usize>,
    min_rows: Option<usize>,
}

/// Preview settings, loadable from a JSON file and overridden by flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct PreviewUiConfig {
    layout: LayoutConfig,
    sheet: SheetPolicy,
    goal: CharacterGoal,
}

impl PreviewUiConfig {
    fn apply_args(mut self, args: &Args) -> Self {
        if let Some(width) = args.width {
            self.layout.width = width;
        }
        if let Some(indent) = args.indent_boxes {
            self.layout.indent_boxes = indent;
        }
        if let Some(count_spaces) = args.count_spaces {
            self.layout.count_spaces = count_spaces;
        }
        if let Some(digits) = args.digits_per_box {
            self.layout.digits_per_box = digits;
        }
        if let Some(min_rows) = args.min_rows {
            self.sheet.min_rows = min_rows;
        }
        if args.min_chars.is_some() {
            self.goal.min = args.min_chars;
        }
        if args.max_chars.is_some() {
            self.goal.max = args.max_chars;
        }
        self
    }

    fn normalized(mut self) -> Self {
        self.layout = self.layout.normalized();
        self.layout.width = self.layout.width.clamp(1, MAX_WIDTH);
        self.sheet.min_rows = self.sheet.min_rows.min(MAX_MIN_ROWS);
        self.goal.min = self
            .goal
            .min
            .filter(|n| *n > 0)
            .map(|n| n.min(MAX_GOAL_CHARS));
        self.goal.max = self
            .goal
            .max
            .filter(|n| *n > 0)
            .map(|n| n.min(MAX_GOAL_CHARS));
        self
    }
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
    let cli = parse_args(args)?;
    let base = match cli.config_path.as_deref() {
        Some(path) => load_config(path)?,
        None => PreviewUiConfig::default(),
    };
    let cfg = base.apply_args(&cli).normalized();
    let text = read_text(&cli.text_path)?;

    let payload = build_payload(&text, cfg.layout, cfg.sheet, cfg.goal);
    if cli.json {
        let json = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    if cli.out_path.is_empty() {
        return Err("--out must not be empty".to_string());
    }
    if let Some(parent) = Path::new(&cli.out_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
    }
    let html = build_html(&payload).map_err(|e| e.to_string())?;
    std::fs::write(&cli.out_path, html).map_err(|e| e.to_string())?;
    println!(
        "wrote {} ({} rows, {} used boxes)",
        cli.out_path, payload.plan.rows, payload.metrics.used_count
    );
    Ok(())
}

fn load_config(path: &str) -> Result<PreviewUiConfig, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("parse {}: {}", path, e))
}

fn read_text(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("read stdin: {}", e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| format!("read {}: {}", path, e))
}

fn parse_usize(args: &[String], i: usize, flag: &str) -> Result<usize, String> {
    let v = args
        .get(i + 1)
        .ok_or_else(|| format!("{} requires a value", flag))?;
    v.parse::<usize>()
        .map_err(|_| format!("invalid {} value '{}'", flag, v))
}

fn parse_args(args: Vec<String>) -> Result<Args, String> {
    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        return Err("help requested".to_string());
    }

    let has_positional_text = args.get(1).is_some_and(|v| !v.starts_with("--"));

    let mut cfg = Args {
        text_path: if has_positional_text {
            args[1].clone()
        } else {
            "-".to_string()
        },
        out_path: DEFAULT_OUT_PATH.to_string(),
        json: false,
        config_path: None,
        width: None,
        indent_boxes: None,
        count_spaces: None,
        digits_per_box: None,
        min_chars: None,
        max_chars: None,
        min_rows: None,
    };

    let mut i = if has_positional_text { 2usize } else { 1usize };
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--out requires a value".to_string())?;
                cfg.out_path = v.clone();
                i += 2;
            }
            "--config" => {
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a value".to_string())?;
                cfg.config_path = Some(v.clone());
                i += 2;
            }
            "--json" => {
                cfg.json = true;
                i += 1;
            }
            "--width" => {
                cfg.width = Some(parse_usize(&args, i, "--width")?);
                i += 2;
            }
            "--indent" => {
                cfg.indent_boxes = Some(parse_usize(&args, i, "--indent")?);
                i += 2;
            }
            "--count-spaces" => {
                cfg.count_spaces = Some(true);
                i += 1;
            }
            "--no-count-spaces" => {
                cfg.count_spaces = Some(false);
                i += 1;
            }
            "--digits-per-box" => {
                cfg.digits_per_box = Some(parse_usize(&args, i, "--digits-per-box")?);
                i += 2;
            }
            "--min-rows" => {
                cfg.min_rows = Some(parse_usize(&args, i, "--min-rows")?);
                i += 2;
            }
            "--min-chars" | "--max-chars" => {
                let flag = args[i].clone();
                let v = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                // Unusable limits mean "no limit" rather than an error.
                let limit = CharacterGoal::parse_limit(v);
                if flag == "--min-chars" {
                    cfg.min_chars = limit;
                } else {
                    cfg.max_chars = limit;
                }
                i += 2;
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(cfg)
}

fn help_text() -> &'static str {
    r#"web-preview - manuscript grid preview for genko

USAGE:
  cargo run -p genko-render-web --bin web-preview -- [text_path|-] [options]

MODES:
  default: generate standalone HTML file at --out
  --json:  print the preview payload as JSON to stdout

OPTIONS:
  --out <file>             output HTML path (default: target/web-preview/index.html)
  --config <file>          JSON settings: {"layout": {...}, "sheet": {...}, "goal": {...}}
  --width <n>              boxes per row (default: 20; common: 20, 25)
  --indent <n>             blank boxes opening each paragraph (default: 1)
  --count-spaces           give typed spaces their own box (default)
  --no-count-spaces        drop typed spaces
  --digits-per-box <n>     digits packed into one box (default: 2)
  --min-rows <n>           rows always shown (default: 3)
  --min-chars <n>          goal minimum; reports shortfall
  --max-chars <n>          character budget; reserves rows and marks overflow
  -h, --help               show this help"#
}
