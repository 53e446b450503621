//! Token classification transformation
//!
//!     Words leave the line scanner as ELEMENT_NAME and quoted text as STRING_LITERAL. This
//!     pass decides their role from their neighbours:
//!
//!         - every STRING_LITERAL becomes VALUE
//!         - a word immediately followed by ASSIGN becomes ATTRIBUTE_NAME
//!         - the token immediately after an ASSIGN becomes VALUE, unless it is a NEWLINE, so a
//!           dangling `name =` keeps the line malformed
//!         - the head of a line (its first token after the transition) becomes ELEMENT_NAME
//!           once a COLON shows up on that line

use crate::token::{Token, TokenKind};
use tracing::debug;

fn is_word(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::ElementName | TokenKind::AttributeName)
}

/// Reclassify tokens in place and return them.
pub fn classify(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut head: Option<usize> = None;
    let mut expect_head = true;
    let mut reclassified = 0;

    for idx in 0..tokens.len() {
        let kind = tokens[idx].kind;

        if kind.is_transition() {
            head = None;
            expect_head = true;
            continue;
        }
        if expect_head && kind != TokenKind::Newline {
            head = Some(idx);
            expect_head = false;
        }

        match kind {
            TokenKind::StringLiteral => {
                tokens[idx].kind = TokenKind::Value;
            }
            TokenKind::Colon => {
                if let Some(head_idx) = head {
                    if tokens[head_idx].kind == TokenKind::AttributeName {
                        tokens[head_idx].kind = TokenKind::ElementName;
                        reclassified += 1;
                    }
                }
            }
            TokenKind::Assign => {
                if idx > 0 && is_word(tokens[idx - 1].kind) {
                    tokens[idx - 1].kind = TokenKind::AttributeName;
                    reclassified += 1;
                }
                if let Some(next) = tokens.get_mut(idx + 1) {
                    if next.kind != TokenKind::Newline {
                        next.kind = TokenKind::Value;
                    }
                }
            }
            _ => {}
        }
    }

    debug!(reclassified, "classification complete");
    tokens
}
