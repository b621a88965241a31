//! `dynjson` CLI: format, validate and query JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Re-serialize compactly (stdin → stdout)
//! echo '{ "name": "Alice", "age": 30 }' | dynjson fmt
//!
//! # Pretty-print from file to file
//! dynjson fmt --pretty -i data.json -o data.pretty.json
//!
//! # Check that a file is valid JSON (exit status 1 and a positioned error if not)
//! dynjson validate -i data.json
//!
//! # Read one value by dotted path; numeric segments index into arrays
//! dynjson get work.type -i author.json
//! dynjson get items.0 --raw -i list.json
//!
//! # Count values by kind
//! dynjson stats -i data.json
//! ```
//!
//! Set `RUST_LOG=debug` to trace input sizes and timings on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dynjson_core::{Kind, ParseOptions, Style, Trailing, Value};
use std::collections::HashMap;
use std::io::{self, Read};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dynjson", version, about = "Format, validate and query JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum nesting depth accepted by the parser
    #[arg(long, global = true, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Ignore anything after the first complete JSON value
    #[arg(long, global = true)]
    allow_trailing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and re-serialize JSON
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// One entry per line instead of compact output
        #[arg(long)]
        pretty: bool,
        /// Spaces per indentation level (with --pretty)
        #[arg(long, default_value_t = 2, requires = "pretty")]
        indent: usize,
    },
    /// Check that the input is valid JSON
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dotted path, e.g. `work.type` or `items.0`
    Get {
        /// Dotted path; an empty path selects the whole document
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print strings without quotes
        #[arg(long)]
        raw: bool,
    },
    /// Show value counts by kind and the maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = ParseOptions::new()
        .with_max_depth(cli.max_depth)
        .with_trailing(if cli.allow_trailing {
            Trailing::Ignore
        } else {
            Trailing::Reject
        });

    match cli.command {
        Commands::Fmt {
            input,
            output,
            pretty,
            indent,
        } => {
            let value = load(input.as_deref(), &options)?;
            let style = if pretty {
                Style::Pretty { indent }
            } else {
                Style::Compact
            };
            let started = Instant::now();
            let mut text = value.to_string_with(style);
            debug!(
                bytes = text.len(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "serialized"
            );
            text.push('\n');
            write_output(output.as_deref(), &text)?;
        }
        Commands::Validate { input } => {
            let value = load(input.as_deref(), &options)?;
            println!("valid JSON ({})", value.kind());
        }
        Commands::Get { path, input, raw } => {
            let value = load(input.as_deref(), &options)?;
            let found =
                lookup(&value, &path).with_context(|| format!("No value at path '{}'", path))?;
            match found {
                Value::String(s) if raw => println!("{}", s),
                other => println!("{}", other),
            }
        }
        Commands::Stats { input } => {
            let value = load(input.as_deref(), &options)?;
            let stats = Stats::collect(&value);
            for kind in Stats::KINDS {
                println!(
                    "{:<8}{}",
                    format!("{}:", kind),
                    stats.counts.get(&kind).copied().unwrap_or(0)
                );
            }
            println!("{:<8}{}", "total:", stats.total());
            println!("{:<8}{}", "depth:", stats.max_depth);
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Read the input and parse it, attaching the source to any error.
fn load(path: Option<&str>, options: &ParseOptions) -> Result<Value> {
    let text = read_input(path)?;
    let source = path.unwrap_or("<stdin>");
    debug!(source, bytes = text.len(), "read input");

    let started = Instant::now();
    let value = Value::parse_with(&text, options)
        .with_context(|| format!("Invalid JSON in {}", source))?;
    debug!(
        kind = %value.kind(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "parsed"
    );
    Ok(value)
}

/// Resolve a dotted path with read-only access. Numeric segments index into
/// arrays; every other segment is an object key.
fn lookup<'a>(root: &'a Value, path: &str) -> dynjson_core::Result<&'a Value> {
    if path.is_empty() {
        return Ok(root);
    }
    let mut current = root;
    for segment in path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) if current.is_array() => current.at(index)?,
            _ => current.at(segment)?,
        };
    }
    Ok(current)
}

#[derive(Default)]
struct Stats {
    counts: HashMap<Kind, usize>,
    max_depth: usize,
}

impl Stats {
    const KINDS: [Kind; 7] = [
        Kind::Null,
        Kind::Bool,
        Kind::Int,
        Kind::Double,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ];

    fn collect(root: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(root, 0);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        *self.counts.entry(value.kind()).or_insert(0) += 1;
        self.max_depth = self.max_depth.max(depth);
        if let Ok(children) = value.iter() {
            for (_, child) in children {
                self.visit(child, depth + 1);
            }
        }
    }

    fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
