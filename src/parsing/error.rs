//! Parse errors

use crate::token::Token;

/// The grammar could not cover the token stream.
///
/// `column` is the offending token's start column, i.e. its recorded column minus the
/// length of its lexeme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected token at line {line}, position {column}")]
pub struct TemplateSyntaxError {
    pub line: usize,
    pub column: usize,
    pub lexeme: String,
}

impl TemplateSyntaxError {
    pub fn at(token: &Token) -> Self {
        TemplateSyntaxError {
            line: token.line,
            column: token.start_column(),
            lexeme: token.lexeme.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] TemplateSyntaxError),

    /// The input stopped in the middle of a construct.
    #[error("unexpected end of input after line {line}")]
    UnexpectedEof { line: usize },

    #[error("document is empty")]
    EmptyDocument,

    /// A line whose indentation matches no open block.
    #[error("inconsistent indentation at line {line}: depth {depth} matches no open block")]
    Indentation { line: usize, depth: usize },
}
