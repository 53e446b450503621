//! Base tokenization using the logos lexer
//!
//!     This is the first lexing pass. It only splits the source into raw pieces (runs of
//!     spaces, line breaks, delimiters, quoted strings and words) and keeps their byte
//!     ranges. Lines, columns and indentation are the line scanner's job.

use super::common::{position_of, LexError};
use logos::Logos;
use std::ops::Range;

/// Raw tokens produced by logos.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r" +", |lex| lex.slice().len())]
    Spaces(usize),

    #[regex(r"\r?\n")]
    Newline,

    // A lone carriage return outside a line break
    #[token("\r")]
    CarriageReturn,

    #[token("=")]
    Assign,

    #[token(":")]
    Colon,

    #[token("<<")]
    TextInject,

    // A single `<` is part of a word
    #[token("<")]
    Angle,

    // A quote preceded by a backslash does not close the string; backslashes are kept
    #[regex(r#""([^"\\]|\\+[^\\])*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),

    #[regex(r#"[^ \r\n=:"<]+"#)]
    Word,
}

/// Tokenize source text into raw tokens with their byte ranges.
///
/// Every character outside a string is covered by some token, so the only failure is a
/// `"` that never closes.
pub fn tokenize(source: &str) -> Result<Vec<(RawToken, Range<usize>)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = vec![];

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let (line, column) = position_of(source, lexer.span().start);
                return Err(LexError::UnterminatedString { line, column });
            }
        }
    }

    Ok(tokens)
}
