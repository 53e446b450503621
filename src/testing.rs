//! Testing utilities
//!
//! Factories for hand-built tokens and element trees. Tests across the crate (and the
//! integration tests) use these instead of spelling out struct literals.

pub mod factories {
    use crate::ast::{Attribute, Element, Node, Text};
    use crate::token::{Token, TokenKind};

    pub fn mk_token(kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
        Token::new(kind, lexeme, line, column)
    }

    /// Tokens with positions that don't matter to the test.
    pub fn mk_tokens(items: &[(TokenKind, &str)]) -> Vec<Token> {
        items
            .iter()
            .enumerate()
            .map(|(idx, (kind, lexeme))| Token::new(*kind, *lexeme, 1, idx + 1))
            .collect()
    }

    pub fn mk_element(indent: &str, tag: &str, children: Vec<Node>) -> Element {
        Element::with_children(indent, tag, children)
    }

    pub fn mk_attr(name: &str, value: &str) -> Node {
        Node::Attribute(Attribute::new(name, value))
    }

    pub fn mk_text(value: &str) -> Node {
        Node::Text(Text::new(value))
    }

    pub fn mk_child(indent: &str, tag: &str, children: Vec<Node>) -> Node {
        Node::Element(mk_element(indent, tag, children))
    }
}
