//! Grammar matcher
//!
//!     A generic backtracking matcher over the [grammar](super::grammar) table. Matching a
//!     symbol tries its alternatives in priority order and commits to the first one whose whole
//!     pattern matches. Terminals match on token kind; symbols recurse, except for a trailing
//!     reference to the symbol being matched, which loops. Running out of tokens fails the
//!     alternative, never the whole parse.
//!
//!     The matcher has no side effects on the element tree. It records a pre-order trace of
//!     [`Step`]s for the alternatives that matched, dropping the steps of any alternative that
//!     later failed, so only the winning derivation is left when matching returns.
//!
//!     It also remembers the furthest token any terminal matched. When the grammar cannot cover
//!     the whole stream, that is where the error is reported.

use super::grammar::{Alternative, Grammar, PatternItem, Symbol, GRAMMAR};
use super::ir::Step;
use crate::token::{Token, TokenKind};
use tracing::trace;

/// The result of matching the start symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Token index just past the match, if the start symbol matched.
    pub end: Option<usize>,
    /// Index of the furthest token matched by any terminal.
    pub furthest: Option<usize>,
    /// Pre-order steps of the winning derivation.
    pub steps: Vec<Step>,
}

/// How far one level of a symbol got.
enum Level {
    /// An alternative matched in full.
    Complete(usize),
    /// The prefix before a trailing self-reference matched; the rest starts at `next`.
    Tail {
        mark: usize,
        alternative: usize,
        next: usize,
    },
}

/// A level waiting for its trailing self-reference to match.
struct Pending {
    /// Index of the level's step in the trace.
    mark: usize,
    start: usize,
    /// Alternative to try next if the tail fails.
    resume: usize,
}

pub struct Matcher<'t> {
    tokens: &'t [Token],
    grammar: &'static Grammar,
    steps: Vec<Step>,
    furthest: Option<usize>,
}

impl<'t> Matcher<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Matcher {
            tokens,
            grammar: &GRAMMAR,
            steps: Vec::new(),
            furthest: None,
        }
    }

    pub fn run(mut self, symbol: Symbol) -> MatchOutcome {
        let end = self.match_symbol(symbol, 0);
        MatchOutcome {
            end,
            furthest: self.furthest,
            steps: self.steps,
        }
    }

    /// Match `symbol` at `start`.
    ///
    /// An alternative ending in the symbol itself (`Body := Line NEWLINE Body`) is matched
    /// by iteration rather than recursion, so stack depth does not grow with document
    /// length. Each iteration is a pending level; when a level runs out of alternatives the
    /// previous level resumes with its next one, which is exactly the backtracking order of
    /// the recursive definition.
    fn match_symbol(&mut self, symbol: Symbol, start: usize) -> Option<usize> {
        let mut pending: Vec<Pending> = Vec::new();
        let mut level_start = start;
        let mut first_alternative = 0;

        loop {
            match self.match_level(symbol, level_start, first_alternative) {
                Some(Level::Complete(end)) => {
                    for level in &pending {
                        self.steps[level.mark].span = level.start..end;
                    }
                    return Some(end);
                }
                Some(Level::Tail { mark, alternative, next }) => {
                    pending.push(Pending {
                        mark,
                        start: level_start,
                        resume: alternative + 1,
                    });
                    level_start = next;
                    first_alternative = 0;
                }
                None => {
                    let level = pending.pop()?;
                    self.steps.truncate(level.mark);
                    level_start = level.start;
                    first_alternative = level.resume;
                }
            }
        }
    }

    /// Try the alternatives of `symbol` from index `first` on, stopping at the first that
    /// matches outright or whose prefix matches before a trailing self-reference.
    fn match_level(&mut self, symbol: Symbol, start: usize, first: usize) -> Option<Level> {
        let grammar = self.grammar;
        let alternatives = grammar.alternatives(symbol);
        for (idx, alternative) in alternatives.iter().enumerate().skip(first) {
            match alternative.pattern.split_last() {
                Some((PatternItem::Rule(tail), prefix)) if *tail == symbol => {
                    let mark = self.steps.len();
                    if let Some(next) = self.match_pattern(alternative, prefix, start) {
                        trace!(?symbol, alternative = idx, start, next, "matched prefix");
                        return Some(Level::Tail {
                            mark,
                            alternative: idx,
                            next,
                        });
                    }
                }
                _ => {
                    let matched = self.match_pattern(alternative, alternative.pattern, start);
                    if let Some(end) = matched {
                        trace!(?symbol, alternative = idx, start, end, "matched");
                        return Some(Level::Complete(end));
                    }
                }
            }
        }
        None
    }

    /// Match `items` of `alternative` from `start`, recording the alternative's step first.
    /// On failure every step recorded since is dropped.
    fn match_pattern(
        &mut self,
        alternative: &Alternative,
        items: &[PatternItem],
        start: usize,
    ) -> Option<usize> {
        let mark = self.steps.len();
        self.steps.push(Step::new(alternative.action, start..start));

        let mut pos = start;
        for item in items {
            let next = match *item {
                PatternItem::Terminal(kind) => self.match_terminal(kind, pos),
                PatternItem::Rule(symbol) => self.match_symbol(symbol, pos),
            };
            match next {
                Some(end) => pos = end,
                None => {
                    self.steps.truncate(mark);
                    return None;
                }
            }
        }

        self.steps[mark].span = start..pos;
        Some(pos)
    }

    fn match_terminal(&mut self, kind: TokenKind, pos: usize) -> Option<usize> {
        let token = self.tokens.get(pos)?;
        if token.kind != kind {
            return None;
        }
        self.furthest = Some(self.furthest.map_or(pos, |furthest| furthest.max(pos)));
        Some(pos + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::grammar::{Action, Shape};
    use crate::testing::factories::mk_tokens;
    use crate::token::TokenKind::*;

    #[test]
    fn test_header_only() {
        let tokens = mk_tokens(&[(ElementName, "div1"), (Colon, ":")]);
        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        assert_eq!(outcome.end, Some(2));
        assert_eq!(outcome.steps, vec![Step::new(Action::OpenRoot, 0..2)]);
    }

    #[test]
    fn test_steps_are_pre_order() {
        let tokens = mk_tokens(&[
            (ElementName, "div1"),
            (AttributeName, "class"),
            (Assign, "="),
            (Value, "window"),
            (Colon, ":"),
            (Newline, "\n"),
            (Indent, "    "),
            (TextInject, "<<"),
            (Value, "hi"),
            (Newline, "\n"),
        ]);
        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        assert_eq!(outcome.end, Some(10));
        assert_eq!(
            outcome.steps,
            vec![
                Step::new(Action::OpenRoot, 0..10),
                Step::new(Action::AttachAttribute, 1..4),
                Step::new(Action::None, 6..10),
                Step::new(Action::Descend(Shape::Text), 6..9),
            ]
        );
    }

    #[test]
    fn test_failed_alternatives_leave_no_steps() {
        // `Line NEWLINE Body` fails at the end of input and falls back to `Line NEWLINE`
        let tokens = mk_tokens(&[
            (ElementName, "div1"),
            (Colon, ":"),
            (Newline, "\n"),
            (Indent, "    "),
            (ElementName, "div2"),
            (Colon, ":"),
            (Newline, "\n"),
        ]);
        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        assert_eq!(outcome.end, Some(7));
        assert_eq!(
            outcome.steps,
            vec![
                Step::new(Action::OpenRoot, 0..7),
                Step::new(Action::None, 3..7),
                Step::new(Action::Descend(Shape::Element), 3..6),
            ]
        );
    }

    #[test]
    fn test_partial_match_records_furthest() {
        let tokens = mk_tokens(&[
            (ElementName, "div1"),
            (Colon, ":"),
            (Newline, "\n"),
            (Indent, "    "),
            (AttributeName, "class"),
            (Assign, "="),
            (Newline, "\n"),
        ]);
        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        // Only `div1 : NEWLINE` can match; the attribute line dies at its NEWLINE.
        assert_eq!(outcome.end, Some(3));
        assert_eq!(outcome.furthest, Some(5));
        assert_eq!(outcome.steps, vec![Step::new(Action::OpenRoot, 0..3)]);
    }

    #[test]
    fn test_long_body_matches_without_deep_recursion() {
        let lines = 100_000;
        let mut items = vec![(ElementName, "div1"), (Colon, ":"), (Newline, "\n")];
        for _ in 0..lines {
            items.extend([(Indent, "    "), (TextInject, "<<"), (Value, "x"), (Newline, "\n")]);
        }
        let tokens = mk_tokens(&items);

        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        assert_eq!(outcome.end, Some(tokens.len()));
        // Root, then a Body and a Text step per line.
        assert_eq!(outcome.steps.len(), 1 + 2 * lines);
        assert_eq!(outcome.steps[1], Step::new(Action::None, 3..tokens.len()));
        let last_line = tokens.len() - 4..tokens.len() - 1;
        assert_eq!(
            outcome.steps.last(),
            Some(&Step::new(Action::Descend(Shape::Text), last_line))
        );
    }

    #[test]
    fn test_no_match() {
        let tokens = mk_tokens(&[(Colon, ":")]);
        let outcome = Matcher::new(&tokens).run(Symbol::Document);
        assert_eq!(outcome.end, None);
        assert_eq!(outcome.furthest, None);
        assert!(outcome.steps.is_empty());
    }
}
