//! `jsontree` CLI — parse, validate and pretty-print JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print a file (object keys come out sorted)
//! jsontree dump -i data.json
//!
//! # Read stdin, indent with two spaces, write to a file
//! cat data.json | jsontree dump --indent 2 -o pretty.json
//!
//! # Validate only
//! jsontree check -i data.json
//!
//! # Print the built-in sample document
//! jsontree demo
//!
//! # Parser tracing on stderr
//! RUST_LOG=jsontree_core=trace jsontree dump -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jsontree_core::{SerializeOptions, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsontree",
    version,
    about = "Parse and pretty-print JSON documents",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print it re-indented
    Dump {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Parse a document and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Build the sample document in code and print it
    Demo {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Args)]
struct FormatArgs {
    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,
    /// Indent with tabs instead of spaces
    #[arg(long, conflicts_with = "indent")]
    tabs: bool,
}

impl FormatArgs {
    fn options(&self) -> SerializeOptions {
        if self.tabs {
            SerializeOptions::tabs()
        } else {
            SerializeOptions::spaces(self.indent)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Dump {
            input,
            output,
            format,
        } => {
            let value = read_document(input.as_deref())?;
            let text = value.dump_with(&format.options());
            write_output(output.as_deref(), &text)?;
        }
        Commands::Check { input } => {
            let value = read_document(input.as_deref())?;
            let summary = match value.size() {
                Ok(n) => format!("ok: {} with {} entries", value.value_type(), n),
                Err(_) => format!("ok: {}", value.value_type()),
            };
            println!("{summary}");
        }
        Commands::Demo { output, format } => {
            let text = sample_document().dump_with(&format.options());
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse a file (read verbatim) or stdin into a document.
fn read_document(path: Option<&str>) -> Result<Value> {
    let result = match path {
        Some(path) => jsontree_core::load_file(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            jsontree_core::parse(&buf)
        }
    };
    let source = path.unwrap_or("<stdin>");
    let value = result
        .into_result()
        .with_context(|| format!("Failed to parse {source}"))?;
    tracing::debug!(source, root = %value.value_type(), "document loaded");
    Ok(value)
}

fn sample_document() -> Value {
    Value::object([
        ("number", Value::from(123)),
        ("number2", Value::from(-1.2e44)),
        (
            "array",
            Value::array([
                Value::from(1),
                Value::from(2),
                Value::from(3),
                Value::from("str1"),
                Value::from(false),
                Value::from(true),
                Value::Null,
            ]),
        ),
    ])
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
