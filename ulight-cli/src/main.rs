//! Command-line driver for ulight: highlights one or more JS/JSX files and
//! dumps the resulting token stream to stdout.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use ulight::{highlight, HighlightKind, Options, Token};

/// The different formats available for dumping the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    /// `{:#?}` of the raw [`Token`] values.
    Debug,
    /// Minified JSON.
    Json,
    /// Pretty-printed JSON.
    JsonPretty,
}

/// ulight: a zero-dependency JavaScript/JSX syntax highlighter.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// The JavaScript/JSX file(s) to highlight.
    #[arg(name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format for the token stream.
    #[arg(long, short = 'f', value_enum, default_value_t = DumpFormat::Debug)]
    format: DumpFormat,

    /// Disable coalescing of adjacent same-kind tokens.
    #[arg(long)]
    no_coalesce: bool,
}

/// A JSON-friendly mirror of [`Token`]; kept in the CLI rather than on the
/// core type so `ulight` itself stays free of a serde dependency.
#[derive(Debug, Serialize)]
struct TokenRecord {
    begin: u32,
    length: u32,
    kind: &'static str,
}

impl From<Token> for TokenRecord {
    fn from(t: Token) -> Self {
        Self {
            begin: t.begin,
            length: t.length,
            kind: kind_name(t.kind),
        }
    }
}

fn kind_name(kind: HighlightKind) -> &'static str {
    kind.as_css_class()
}

fn dump(tokens: &[Token], format: DumpFormat) {
    match format {
        DumpFormat::Debug => println!("{tokens:#?}"),
        DumpFormat::Json => {
            let records: Vec<TokenRecord> = tokens.iter().copied().map(Into::into).collect();
            println!("{}", serde_json::to_string(&records).expect("token records always serialize"));
        }
        DumpFormat::JsonPretty => {
            let records: Vec<TokenRecord> = tokens.iter().copied().map(Into::into).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&records).expect("token records always serialize")
            );
        }
    }
}

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init()
        .ok();

    let args = Opt::parse();
    let options = Options {
        coalescing: !args.no_coalesce,
    };

    if args.files.is_empty() {
        log::error!("no input files given");
        return ExitCode::FAILURE;
    }

    let mut had_error = false;
    for file in &args.files {
        let source = match fs::read(file) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("failed to read {}: {e}", file.display());
                had_error = true;
                continue;
            }
        };
        let tokens = highlight(&source, options);
        dump(&tokens, args.format);
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
