use crate::engine::{inspect, SelectorInput, SelectorParser, URL_KEY};
use crate::types::{ApiResponse, ParserConfig, RendererKind};
use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "selector-parser",
    version,
    about = "Classify, validate and match CSS/XPath selectors (JSON only)"
)]
pub struct Cli {
    /// Selector mapping: inline JSON, a path to a JSON file, or `-` for stdin
    selectors: String,

    /// Markup to match against: a file path, or `-` for stdin
    #[arg(long)]
    html: Option<String>,

    /// Page to fetch when no markup is given (overrides the mapping's `url`)
    #[arg(long)]
    url: Option<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fetch timeout in milliseconds
    #[arg(long = "timeout-ms")]
    timeout_ms: Option<u64>,

    /// Render with headless Chrome (needs the `headless` feature)
    #[arg(long)]
    headless: bool,

    /// Keep extracted whitespace as-is
    #[arg(long = "raw-text")]
    raw_text: bool,

    /// Classify and validate only; no document is loaded
    #[arg(long = "validate-only")]
    validate_only: bool,
}

#[derive(Serialize)]
struct Output<T> {
    all_valid: bool,
    fields: T,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(data) => {
            print_json(ApiResponse::ok(data));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "call failed");
            print_json(ApiResponse::<()>::err(format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<Value> {
    if cli.selectors == "-" && cli.html.as_deref() == Some("-") {
        bail!("stdin can supply either the selectors or the markup, not both");
    }

    let config = load_config(&cli)?;
    let input = selector_input(&cli)?;

    if cli.validate_only {
        let entries = inspect(input)?;
        return Ok(serde_json::to_value(Output {
            all_valid: entries.values().all(|e| e.is_valid),
            fields: entries,
        })?);
    }

    let markup = cli.html.as_deref().map(read_input).transpose()?;
    let report = SelectorParser::new(config)?.parse_and_validate(input, markup.as_deref())?;
    Ok(serde_json::to_value(Output {
        all_valid: report.all_valid(),
        fields: report,
    })?)
}

fn load_config(cli: &Cli) -> anyhow::Result<ParserConfig> {
    let mut config = match &cli.config {
        Some(path) => ParserConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ParserConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if cli.headless {
        config = config.with_renderer(RendererKind::Headless);
    }
    if cli.raw_text {
        config = config.with_collapse_whitespace(false);
    }
    Ok(config)
}

/// `-` and existing files are read; anything else is taken as inline JSON
/// and passed through untouched so malformed input is reported by the parser
/// itself.
fn selector_input(cli: &Cli) -> anyhow::Result<SelectorInput> {
    let text = if cli.selectors == "-" || Path::new(&cli.selectors).is_file() {
        read_input(&cli.selectors)?
    } else {
        cli.selectors.clone()
    };

    let Some(url) = &cli.url else {
        return Ok(SelectorInput::Json(text));
    };
    let mut value: Value = serde_json::from_str(&text).map_err(crate::SelectorError::from)?;
    if let Value::Object(fields) = &mut value {
        fields.insert(URL_KEY.to_string(), Value::String(url.clone()));
    }
    Ok(SelectorInput::Value(value))
}

/// `-` reads stdin; anything else is a file path.
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn print_json<T: Serialize>(val: T) {
    match serde_json::to_string_pretty(&val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}
