//! Token types shared across the lexer, parser, and tooling.
//!
//!     pyhtml does most of its disambiguation while lexing so that the grammar can stay a flat
//!     table of token-kind sequences. Every token carries its own line and column so that the
//!     parser can report errors without going back to the source text.
//!
//! Token Layers
//!
//!     Raw Tokens:
//!         Character level tokens produced by the logos lexer. They never leave the lexing
//!         module. See [base_tokenization](crate::lexing::base_tokenization).
//!
//!     Structural Tokens:
//!         Indent and Unindent. Synthesized once per content line (except the first) from the
//!         length of the line's leading whitespace, compared only to the previous content line.
//!         Their lexeme is the literal indentation text, which the element tree keeps verbatim.
//!
//!     Classified Tokens:
//!         Element names, attribute names and values. Words are lexically identical until the
//!         classification pass decides their role from their neighbours. See
//!         [classification](crate::lexing::transformations::classification).

pub mod core;
pub mod formatting;

pub use core::{Token, TokenKind};
pub use formatting::{to_json, to_listing};
