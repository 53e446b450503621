//! Core token definitions

use serde::Serialize;
use std::fmt;

/// The syntactic role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    ElementName,
    AttributeName,
    Assign,
    Colon,
    Indent,
    Unindent,
    Newline,
    Value,
    /// Quoted text before classification. Never reaches the parser.
    StringLiteral,
    TextInject,
}

impl TokenKind {
    /// Indent and Unindent, the per-line structural tokens.
    pub fn is_transition(self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Unindent)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ElementName => "ELEMENT_NAME",
            TokenKind::AttributeName => "ATTRIBUTE_NAME",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Colon => "COLON",
            TokenKind::Indent => "INDENT",
            TokenKind::Unindent => "UNINDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Value => "VALUE",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::TextInject => "TEXT_INJECT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token with its source position.
///
/// `column` is the 1-based column one past the lexeme's last character (for quoted
/// values, the column of the closing quote), so `column - lexeme length` is where the
/// lexeme starts. See [`Token::start_column`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            line,
            column,
        }
    }

    pub fn is_transition(&self) -> bool {
        self.kind.is_transition()
    }

    /// Whether the token carries source content (anything but line structure).
    pub fn has_content(&self) -> bool {
        !self.kind.is_transition() && self.kind != TokenKind::Newline
    }

    /// Column where the lexeme starts, as reported in error messages.
    pub fn start_column(&self) -> usize {
        self.column.saturating_sub(self.lexeme.chars().count())
    }

    /// Indentation depth of a transition token, in characters.
    pub fn depth(&self) -> usize {
        self.lexeme.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}
