//! High-level loading API for KON documents.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read KON text from a file, an `http(s)://` URL,
//!   or a string
//! - **Parsing** - run the [`kon_parser`] front end over the text
//! - **Issue Reporting** - forward non-fatal parser issues to the shared
//!   warning system
//!
//! The parser core stays free of I/O and logging; this crate is where both
//! happen.

pub use kon_parser as parser;

use kon_common::net::{fetch_text, is_remote};
use kon_common::warning::{clear_warnings, warn_once};
use kon_parser::{KonElement, KonParser, ParseError, ParseIssue, prepare_tokens, tokenize};
use std::fs;
use std::io;
use thiserror::Error;

/// A loaded and parsed document.
///
/// Contains the parsed tree plus the intermediate data useful for debugging.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Original KON source
    pub source: String,

    /// Source path or URL (empty for in-memory strings)
    pub source_path: String,

    /// Prepared token stream (for debugging)
    pub tokens: Vec<String>,

    /// Root elements in source order
    pub elements: Vec<KonElement>,

    /// Non-fatal parser issues
    pub issues: Vec<ParseIssue>,
}

/// Options controlling how a document is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Print each parser issue through the warning system.
    pub warn_issues: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { warn_issues: true }
    }
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    File {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Failed to fetch URL
    #[error("Network error: {0}")]
    Network(String),
    /// The text is not valid KON
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Load a document from a file path or URL.
///
/// This is the main entry point for loading a document. It handles:
/// - File reading for local paths
/// - URL fetching for http:// and https:// URLs
/// - Tokenizing and parsing
/// - Reporting parser issues as warnings
///
/// # Errors
///
/// Returns a [`LoadError`] if the source cannot be read or does not parse.
pub fn load_document(path: &str) -> Result<LoadedDocument, LoadError> {
    load_document_with(path, LoadOptions::default())
}

/// Load a document from a file path or URL with explicit options.
///
/// # Errors
///
/// Returns a [`LoadError`] if the source cannot be read or does not parse.
pub fn load_document_with(path: &str, options: LoadOptions) -> Result<LoadedDocument, LoadError> {
    let source = if is_remote(path) {
        fetch_text(path).map_err(LoadError::Network)?
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_string(),
            source,
        })?
    };

    let mut doc = parse_kon_string_with(&source, options)?;
    doc.source_path = path.to_string();
    Ok(doc)
}

/// Parse a KON string into a [`LoadedDocument`].
///
/// Use this when you already have the KON content as a string.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the text is not valid KON.
pub fn parse_kon_string(source: &str) -> Result<LoadedDocument, LoadError> {
    parse_kon_string_with(source, LoadOptions::default())
}

/// Parse a KON string with explicit options.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the text is not valid KON.
pub fn parse_kon_string_with(
    source: &str,
    options: LoadOptions,
) -> Result<LoadedDocument, LoadError> {
    // STEP 1: Classify characters, condense literals, drop blanks.
    let tokens = prepare_tokens(tokenize(source))?;

    // STEP 2: Parse.
    let parser = KonParser::new(tokens.clone());
    let (elements, issues) = parser.run_with_issues()?;

    // STEP 3: Report issues. Each document starts with a fresh dedup set.
    if options.warn_issues {
        clear_warnings();
        for issue in &issues {
            warn_once(
                "Parser",
                &format!("{} (token {})", issue.message, issue.token_index),
            );
        }
    }

    Ok(LoadedDocument {
        source: source.to_string(),
        source_path: String::new(),
        tokens,
        elements,
        issues,
    })
}
