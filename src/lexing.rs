//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for pyhtml. Each pass receives the
//!     previous pass's tokens and returns a new sequence.
//!
//! The Lexing Pipeline
//!
//!     The pipeline consists of:
//!         1. Core tokenization using logos. See [base_tokenization](base_tokenization).
//!            Splits the source into spaces, line breaks, delimiters, quoted strings and words.
//!            An unterminated string is the only lexical error.
//!
//!         2. Line scanning. See [line_scanning](transformations::line_scanning).
//!            Assigns lines and columns, drops blank lines, merges word fragments and
//!            synthesizes one INDENT or UNINDENT at the start of every content line after
//!            the first.
//!
//!         3. Classification. See [classification](transformations::classification).
//!            Decides which words are attribute names and which tokens are values.
//!
//!     At this point, lexing is complete and the tokens can be fed to the grammar matcher.
//!
//! Indentation Handling
//!
//!     The lexer only compares each line with the line before it, so INDENT means "at least as
//!     deep as the previous line" and UNINDENT means "shallower". The literal indentation text
//!     rides along as the transition's lexeme, and the parser resolves the enclosing element
//!     from it.

pub mod base_tokenization;
pub mod common;
pub mod transformations;

pub use common::LexError;

use crate::token::{to_listing, Token};
use tracing::{debug, enabled, trace, Level};

/// Run all lexing passes over `source`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let raw = base_tokenization::tokenize(source)?;
    debug!(raw_tokens = raw.len(), "base tokenization complete");
    let scanned = transformations::scan_lines(source, raw);
    let tokens = transformations::classify(scanned);
    if enabled!(Level::TRACE) {
        trace!("classified tokens:\n{}", to_listing(&tokens));
    }
    Ok(tokens)
}
