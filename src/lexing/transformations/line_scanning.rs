//! Line scanning transformation
//!
//!     Turns raw logos tokens into positioned tokens, one line at a time. This is where the
//!     structural tokens come from: on the first content of every line after the first, the
//!     length of the line's leading spaces is compared with the previous content line's.
//!     A length that is the same or larger emits INDENT, a smaller one emits UNINDENT. Only the
//!     previous line is consulted; deciding which block a line belongs to is left to the parser,
//!     which has the full stack of open elements.
//!
//! Positions
//!
//!     Lines are counted by line breaks outside strings. A line break inside a quoted string is
//!     string content and does not advance the line counter. Columns are 1-based; every token
//!     records the column just past its last character, except quoted strings, which record
//!     the column of their closing quote.
//!
//! Blank Lines
//!
//!     Lines holding nothing but spaces produce no tokens at all, so they never influence
//!     indentation. Leading blank lines and leading spaces before the first content are skipped.

use crate::lexing::base_tokenization::RawToken;
use crate::token::{Token, TokenKind};
use std::ops::Range;
use tracing::{debug, trace};

/// Stateful scanner producing positioned tokens from raw tokens.
pub struct LineScanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    line: usize,
    column: usize,
    /// Set after a NEWLINE until the line's first content.
    at_line_start: bool,
    seen_content: bool,
    indentation: String,
    previous_depth: usize,
    /// A COLON was seen on the current line.
    block_pending: bool,
    word: Option<String>,
}

impl<'a> LineScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        LineScanner {
            source,
            tokens: Vec::new(),
            line: 1,
            column: 1,
            at_line_start: false,
            seen_content: false,
            indentation: String::new(),
            previous_depth: 0,
            block_pending: false,
            word: None,
        }
    }

    /// Consume the raw tokens, returning STRING_LITERAL for quoted text and ELEMENT_NAME for
    /// every word. Role classification happens in the next pass.
    pub fn scan(mut self, raw: Vec<(RawToken, Range<usize>)>) -> Vec<Token> {
        for (token, span) in raw {
            let text = &self.source[span];
            match token {
                RawToken::Spaces(width) => {
                    self.flush_word();
                    if self.at_line_start {
                        self.indentation.push_str(text);
                    }
                    self.column += width;
                }
                RawToken::Newline => self.newline(text),
                RawToken::CarriageReturn => {}
                RawToken::Word | RawToken::Angle => {
                    self.begin_content();
                    self.word.get_or_insert_with(String::new).push_str(text);
                    self.column += text.chars().count();
                }
                RawToken::Assign => self.push_symbol(TokenKind::Assign, text),
                RawToken::Colon => {
                    self.push_symbol(TokenKind::Colon, text);
                    self.block_pending = true;
                }
                RawToken::TextInject => self.push_symbol(TokenKind::TextInject, text),
                RawToken::Str(content) => {
                    self.flush_word();
                    self.begin_content();
                    self.column += text.chars().count();
                    let closing_quote = self.column - 1;
                    self.emit(TokenKind::StringLiteral, content, closing_quote);
                }
            }
        }
        self.flush_word();

        debug!(tokens = self.tokens.len(), lines = self.line, "line scanning complete");
        self.tokens
    }

    fn newline(&mut self, text: &str) {
        self.flush_word();
        if !self.seen_content || self.at_line_start {
            trace!(line = self.line, "skipping blank line");
            self.indentation.clear();
            self.line += 1;
            self.column = 1;
            return;
        }

        self.column += 1;
        self.emit(TokenKind::Newline, text, self.column);
        if self.block_pending {
            trace!(line = self.line, "block opened");
            self.block_pending = false;
        }
        self.line += 1;
        self.column = 1;
        self.at_line_start = true;
    }

    /// Emit the line's transition token if this is its first content.
    fn begin_content(&mut self) {
        if !self.seen_content {
            self.seen_content = true;
            return;
        }
        if !self.at_line_start {
            return;
        }

        let depth = self.indentation.chars().count();
        let kind = if self.previous_depth <= depth {
            TokenKind::Indent
        } else {
            TokenKind::Unindent
        };
        trace!(line = self.line, depth, previous = self.previous_depth, %kind, "line transition");
        let indentation = std::mem::take(&mut self.indentation);
        self.emit(kind, indentation, self.column);
        self.previous_depth = depth;
        self.at_line_start = false;
    }

    fn push_symbol(&mut self, kind: TokenKind, text: &str) {
        self.flush_word();
        self.begin_content();
        self.column += text.chars().count();
        self.emit(kind, text, self.column);
    }

    fn flush_word(&mut self) {
        if let Some(word) = self.word.take() {
            self.emit(TokenKind::ElementName, word, self.column);
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: impl Into<String>, column: usize) {
        self.tokens.push(Token::new(kind, lexeme, self.line, column));
    }
}

/// Run the line scanner over raw tokens.
pub fn scan_lines(source: &str, raw: Vec<(RawToken, Range<usize>)>) -> Vec<Token> {
    LineScanner::new(source).scan(raw)
}
