//! Token listings for debugging
//!
//! Two views over a token stream: a compact one-token-per-line listing, useful in test
//! failures and traces, and a JSON dump used by the CLI's `--emit tokens`.

use super::core::Token;

/// One token per line: `line:column KIND "lexeme"`.
pub fn to_listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{} {} {:?}",
                token.line, token.column, token.kind, token.lexeme
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of tokens.
pub fn to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_listing() {
        let tokens = vec![
            Token::new(TokenKind::ElementName, "div1", 1, 5),
            Token::new(TokenKind::Colon, ":", 1, 6),
        ];
        assert_eq!(
            to_listing(&tokens),
            "1:5 ELEMENT_NAME \"div1\"\n1:6 COLON \":\""
        );
    }

    #[test]
    fn test_json_uses_screaming_kind_names() {
        let tokens = vec![Token::new(TokenKind::TextInject, "<<", 2, 7)];
        let json = to_json(&tokens).unwrap();
        assert!(json.contains("\"kind\": \"TEXT_INJECT\""));
        assert!(json.contains("\"lexeme\": \"<<\""));
    }
}
