//! Parser
//!
//!     Parsing runs in two phases over the classified tokens:
//!
//!         1. Matching. See [engine](engine). The backtracking matcher walks the
//!            [grammar](grammar) table from the Document symbol and produces the pre-order
//!            steps of the winning derivation. Nothing is built yet.
//!
//!         2. Building. See [builder](builder). Only when the match covers the whole stream
//!            are the steps replayed, in order, against a fresh [`ParserContext`].
//!
//!     Keeping the phases apart means an alternative that matched partway and was then
//!     abandoned never leaves nodes behind.
//!
//! Errors
//!
//!     Coverage ignores trailing INDENT/UNINDENT tokens. When the grammar cannot cover the
//!     stream, the error points at the first token with content after the furthest token any
//!     terminal matched. If no such token exists, the input ended too early.

pub mod builder;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod ir;

pub use builder::ParserContext;
pub use error::{ParseError, TemplateSyntaxError};
pub use grammar::Symbol;

use crate::ast::Element;
use crate::token::Token;
use engine::Matcher;
use tracing::debug;

/// Parse classified tokens into the root element.
pub fn parse(tokens: &[Token]) -> Result<Element, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let outcome = Matcher::new(tokens).run(Symbol::Document);
    let covered = outcome
        .end
        .is_some_and(|end| tokens[end..].iter().all(Token::is_transition));
    if !covered {
        return Err(syntax_error(tokens, outcome.furthest));
    }
    debug!(steps = outcome.steps.len(), "grammar matched");

    let mut context = ParserContext::new();
    for step in &outcome.steps {
        context.apply(step.action, &tokens[step.span.clone()])?;
    }
    context.finish()
}

fn syntax_error(tokens: &[Token], furthest: Option<usize>) -> ParseError {
    let from = furthest.map_or(0, |idx| idx + 1);
    match tokens[from..].iter().find(|token| token.has_content()) {
        Some(token) => TemplateSyntaxError::at(token).into(),
        None => ParseError::UnexpectedEof {
            line: tokens.last().map_or(1, |token| token.line),
        },
    }
}
