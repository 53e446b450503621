//! Intermediate Representation for the matcher
//!
//! The matcher never touches the element tree. It records, in pre-order, which
//! alternative matched and which tokens it covered; the builder replays those steps
//! once the whole match has succeeded.

use super::grammar::Action;
use std::ops::Range;

/// One matched alternative: its action and the token indices it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub span: Range<usize>,
}

impl Step {
    pub fn new(action: Action, span: Range<usize>) -> Self {
        Step { action, span }
    }
}
