//! Crate-level error type

use crate::formats::FormatError;
use crate::lexing::LexError;
use crate::parsing::ParseError;

/// Any failure while compiling a document. Compilation stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
