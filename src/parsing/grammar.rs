//! Grammar table
//!
//!     pyhtml's grammar is a small table: four symbols, each owning a list of alternatives.
//!     An alternative is a fixed sequence of pattern items (a token kind, or another symbol)
//!     paired with the action to run when it ends up in the winning match.
//!
//!     Document    := ELEMENT_NAME [Attributes] COLON [NEWLINE [Body]]
//!     Body        := Line [NEWLINE [Body]]
//!     Line        := T ELEMENT_NAME [Attributes] COLON
//!                  | T ATTRIBUTE_NAME ASSIGN VALUE
//!                  | T TEXT_INJECT VALUE
//!     Attributes  := ATTRIBUTE_NAME ASSIGN VALUE [Attributes]
//!
//!     where T is INDENT or UNINDENT. Optional parts are spelled out as separate alternatives.
//!
//! Priority
//!
//!     Alternatives are tried longest pattern first, ties in declaration order. The matcher
//!     commits to the first alternative that matches, so trying `ELEMENT_NAME COLON` before
//!     `ELEMENT_NAME COLON NEWLINE Body` would stop after the first line of every document.
//!     The order is computed once, when the grammar is built.

use crate::token::TokenKind;
use once_cell::sync::Lazy;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Document,
    Body,
    Line,
    Attributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternItem {
    Terminal(TokenKind),
    Rule(Symbol),
}

/// What a body line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Element,
    Attribute,
    Text,
}

/// Semantic action of an alternative, run by the builder after matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    OpenRoot,
    /// A body line introduced by INDENT.
    Descend(Shape),
    /// A body line introduced by UNINDENT.
    Ascend(Shape),
    AttachAttribute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    pub pattern: &'static [PatternItem],
    pub action: Action,
}

const ELEMENT_NAME: PatternItem = PatternItem::Terminal(TokenKind::ElementName);
const ATTRIBUTE_NAME: PatternItem = PatternItem::Terminal(TokenKind::AttributeName);
const ASSIGN: PatternItem = PatternItem::Terminal(TokenKind::Assign);
const VALUE: PatternItem = PatternItem::Terminal(TokenKind::Value);
const COLON: PatternItem = PatternItem::Terminal(TokenKind::Colon);
const NEWLINE: PatternItem = PatternItem::Terminal(TokenKind::Newline);
const INDENT: PatternItem = PatternItem::Terminal(TokenKind::Indent);
const UNINDENT: PatternItem = PatternItem::Terminal(TokenKind::Unindent);
const TEXT_INJECT: PatternItem = PatternItem::Terminal(TokenKind::TextInject);

const BODY: PatternItem = PatternItem::Rule(Symbol::Body);
const LINE: PatternItem = PatternItem::Rule(Symbol::Line);
const ATTRIBUTES: PatternItem = PatternItem::Rule(Symbol::Attributes);

const fn alt(pattern: &'static [PatternItem], action: Action) -> Alternative {
    Alternative { pattern, action }
}

/// The prioritized alternatives of every symbol.
#[derive(Debug)]
pub struct Grammar {
    document: Vec<Alternative>,
    body: Vec<Alternative>,
    line: Vec<Alternative>,
    attributes: Vec<Alternative>,
}

impl Grammar {
    fn new() -> Self {
        let document = vec![
            alt(&[ELEMENT_NAME, COLON], Action::OpenRoot),
            alt(&[ELEMENT_NAME, COLON, NEWLINE], Action::OpenRoot),
            alt(&[ELEMENT_NAME, ATTRIBUTES, COLON], Action::OpenRoot),
            alt(&[ELEMENT_NAME, COLON, NEWLINE, BODY], Action::OpenRoot),
            alt(&[ELEMENT_NAME, ATTRIBUTES, COLON, NEWLINE], Action::OpenRoot),
            alt(
                &[ELEMENT_NAME, ATTRIBUTES, COLON, NEWLINE, BODY],
                Action::OpenRoot,
            ),
        ];

        let body = vec![
            alt(&[LINE], Action::None),
            alt(&[LINE, NEWLINE], Action::None),
            alt(&[LINE, NEWLINE, BODY], Action::None),
        ];

        let line = vec![
            alt(&[INDENT, ELEMENT_NAME, COLON], Action::Descend(Shape::Element)),
            alt(&[INDENT, TEXT_INJECT, VALUE], Action::Descend(Shape::Text)),
            alt(
                &[INDENT, ELEMENT_NAME, ATTRIBUTES, COLON],
                Action::Descend(Shape::Element),
            ),
            alt(
                &[INDENT, ATTRIBUTE_NAME, ASSIGN, VALUE],
                Action::Descend(Shape::Attribute),
            ),
            alt(&[UNINDENT, ELEMENT_NAME, COLON], Action::Ascend(Shape::Element)),
            alt(&[UNINDENT, TEXT_INJECT, VALUE], Action::Ascend(Shape::Text)),
            alt(
                &[UNINDENT, ELEMENT_NAME, ATTRIBUTES, COLON],
                Action::Ascend(Shape::Element),
            ),
            alt(
                &[UNINDENT, ATTRIBUTE_NAME, ASSIGN, VALUE],
                Action::Ascend(Shape::Attribute),
            ),
        ];

        let attributes = vec![
            alt(&[ATTRIBUTE_NAME, ASSIGN, VALUE], Action::AttachAttribute),
            alt(
                &[ATTRIBUTE_NAME, ASSIGN, VALUE, ATTRIBUTES],
                Action::AttachAttribute,
            ),
        ];

        Grammar {
            document: prioritize(document),
            body: prioritize(body),
            line: prioritize(line),
            attributes: prioritize(attributes),
        }
    }

    pub fn alternatives(&self, symbol: Symbol) -> &[Alternative] {
        match symbol {
            Symbol::Document => &self.document,
            Symbol::Body => &self.body,
            Symbol::Line => &self.line,
            Symbol::Attributes => &self.attributes,
        }
    }
}

/// Stable sort, longest pattern first.
fn prioritize(mut alternatives: Vec<Alternative>) -> Vec<Alternative> {
    alternatives.sort_by_key(|alternative| Reverse(alternative.pattern.len()));
    alternatives
}

pub static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::new);
