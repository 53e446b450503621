//! pyhtml compiler
//!
//!     pyhtml is an indentation-based markup for HTML. A document is a tree of tagged
//!     elements: a header line names the element and ends with a colon, attributes go inline
//!     before the colon or on their own lines in the body, and `<<` lines inject literal text.
//!
//!         div1 class = "window":
//!             style = "position: absolute;"
//!             << "hello"
//!             div2:
//!                 << "world"
//!
//!     compiles to
//!
//!         <div1 class='window' style='position: absolute;'>
//!         hello
//!             <div2>
//!         world
//!             </div2>
//!         </div1>
//!
//! Pipeline
//!
//!     Data flows one way, text to tokens to tree to text:
//!
//!         1. [lexing]: logos tokenization, line scanning (indentation transitions) and
//!            classification of attribute names and values.
//!         2. [parsing]: a backtracking matcher over a static [grammar](parsing::grammar)
//!            table, then tree construction from the winning match.
//!         3. [formats]: the HTML serializer, plus a treeviz rendering for debugging.
//!
//!     The stages are wired together as [transforms](transforms::standard); [`compile`] runs
//!     the full pipeline.
//!
//!     Attribute values and text are emitted verbatim. Nothing is escaped or validated.
//!
//! Indentation
//!
//!     Body lines must be indented deeper than their element's header, and all body lines of
//!     one element share the same indentation. A document has exactly one top-level element:
//!     a line at column 1 after the root header, such as `<< "x"` or a second `div2:`, is
//!     rejected with [`ParseError::Indentation`](parsing::ParseError::Indentation) instead of
//!     being appended to the root. Indent such lines under the root to nest them.

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod transforms;

pub use error::CompileError;

use transforms::standard::TO_HTML;

/// Compile a pyhtml document to HTML.
pub fn compile(source: &str) -> Result<String, CompileError> {
    TO_HTML.run(source.to_string())
}
