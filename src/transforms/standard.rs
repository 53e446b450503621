//! Standard transform definitions
//!
//! Pre-built pipelines, defined as statics with `once_cell::sync::Lazy`.

use crate::ast::Element;
use crate::token::Token;
use crate::transforms::stages::{Parsing, Serialization, Tokenization};
use crate::transforms::Transform;
use once_cell::sync::Lazy;

pub type LexingTransform = Transform<String, Vec<Token>>;

pub type AstTransform = Transform<String, Element>;

pub type HtmlTransform = Transform<String, String>;

/// Lexing transform: String → Vec<Token>
///
/// Base tokenization, line scanning and classification.
pub static LEXING: Lazy<LexingTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// String to element tree: String → Element
pub static TO_AST: Lazy<AstTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&LEXING).then(Parsing::new()));

/// The compiler: String → HTML String
pub static TO_HTML: Lazy<HtmlTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&TO_AST)
        .then(Serialization::new("html"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories::{mk_child, mk_element};

    #[test]
    fn test_lexing() {
        let tokens = LEXING.run("div1:\n    div2:\n".to_string()).unwrap();
        assert!(tokens.iter().any(Token::is_transition));
    }

    #[test]
    fn test_to_ast() {
        assert_eq!(
            TO_AST.run("div1:\n    div2:\n".to_string()).unwrap(),
            mk_element("", "div1", vec![mk_child("    ", "div2", vec![])])
        );
    }

    #[test]
    fn test_to_html() {
        assert_eq!(
            TO_HTML.run("div1:\n    div2:\n".to_string()).unwrap(),
            "<div1>\n    <div2>\n    </div2>\n</div1>"
        );
    }
}
