//! Common lexer module
//!
//! Shared error type and position helpers for the lexing passes.

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `"` with no closing quote before the end of input.
    #[error("unterminated string literal starting at line {line}, position {column}")]
    UnterminatedString { line: usize, column: usize },
}

/// Physical 1-based line and column of a byte offset into `source`.
pub fn position_of(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|idx| idx + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_first_line() {
        assert_eq!(position_of("div1:", 0), (1, 1));
        assert_eq!(position_of("div1:", 4), (1, 5));
    }

    #[test]
    fn test_position_of_later_line() {
        let source = "div1:\n    << \"abc";
        let quote = source.find('"').unwrap();
        assert_eq!(position_of(source, quote), (2, 8));
    }
}
