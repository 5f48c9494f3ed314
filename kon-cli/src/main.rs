//! KON CLI
//!
//! Parses a KON document and prints its element tree.
//!
//! Usage:
//!   kon <file|URL>              Parse and display the element tree
//!   kon <file|URL> --json       Output the elements as JSON
//!   kon <file|URL> --tokens     Also show the prepared token stream
//!   kon --source 'a = 1'        Parse inline text

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kon_loader::{LoadOptions, LoadedDocument, load_document_with, parse_kon_string_with};
use kon_parser::KonElement;
use owo_colors::OwoColorize;

/// Parse a KON document and print its element tree
#[derive(Parser, Debug)]
#[command(name = "kon")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    kon settings.kon

    # Fetch and print a remote document as JSON
    kon --json https://example.com/app.kon

    # Parse inline text and show its tokens
    kon --tokens --source 'window (width = 640 px) = "Main"'
"#)]
struct Cli {
    /// Path to a KON file or an http(s) URL
    #[arg(value_name = "FILE|URL", conflicts_with = "source")]
    path: Option<String>,

    /// Parse this KON text instead of reading a file
    #[arg(long, value_name = "TEXT")]
    source: Option<String>,

    /// Print the prepared token stream before the tree
    #[arg(short, long)]
    tokens: bool,

    /// Print the elements as pretty JSON
    #[arg(short, long)]
    json: bool,

    /// Do not print parser warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = LoadOptions {
        warn_issues: !cli.quiet,
    };

    let doc = match (&cli.source, &cli.path) {
        (Some(text), _) => {
            parse_kon_string_with(text, options).context("Failed to parse --source")?
        }
        (None, Some(path)) => {
            load_document_with(path, options).with_context(|| format!("Failed to load '{path}'"))?
        }
        (None, None) => bail!("No input file or --source provided (see --help)"),
    };

    if cli.tokens {
        print_tokens(&doc);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&doc.elements)?);
    } else {
        print_elements(&doc.elements);
    }

    Ok(())
}

fn print_tokens(doc: &LoadedDocument) {
    println!("{}", format!("=== Tokens ({}) ===", doc.tokens.len()).bold());
    for (i, token) in doc.tokens.iter().enumerate() {
        println!("  {i:3}: {}", token.escape_debug());
    }
    println!();
}

fn print_elements(elements: &[KonElement]) {
    println!("{}", format!("=== Elements ({}) ===", elements.len()).bold());
    for element in elements {
        println!("{element}");
    }
}
