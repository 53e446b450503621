//! Element tree builder
//!
//!     [`ParserContext`] replays the matcher's steps and grows the element tree. It keeps a
//!     stack of open elements, the root at the bottom. Every frame remembers the depth of the
//!     line that opened it and the depth of its body lines, fixed by the first one.
//!
//!     A body line is placed by its indentation depth, whatever transition introduced it:
//!     frames opened at the same depth or deeper are closed (and appended to their parents),
//!     and the line goes into the innermost remaining element. It must sit deeper than that
//!     element's header and at the same depth as the element's other body lines, otherwise
//!     the document is rejected with [`ParseError::Indentation`].
//!
//!     Elements open a new frame. Attributes and text are appended to the container.

use super::error::ParseError;
use super::grammar::{Action, Shape};
use crate::ast::{Attribute, Element, Node, Text};
use crate::token::Token;
use tracing::{debug, trace};

#[derive(Debug)]
struct Frame {
    depth: usize,
    body_depth: Option<usize>,
    element: Element,
}

/// Tree construction state, scoped to one parse.
#[derive(Debug, Default)]
pub struct ParserContext {
    frames: Vec<Frame>,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the action of one matched alternative over the tokens it covered.
    pub fn apply(&mut self, action: Action, tokens: &[Token]) -> Result<(), ParseError> {
        match action {
            Action::None => Ok(()),
            Action::OpenRoot => {
                self.open_root(&tokens[0]);
                Ok(())
            }
            Action::AttachAttribute => {
                self.attach_attribute(Attribute::new(&tokens[0].lexeme, &tokens[2].lexeme))
            }
            Action::Descend(shape) => self.descend(&tokens[0], line_node(shape, tokens)),
            Action::Ascend(shape) => self.ascend(&tokens[0], line_node(shape, tokens)),
        }
    }

    pub fn open_root(&mut self, tag: &Token) {
        debug!(tag = %tag.lexeme, "opening root element");
        self.frames.push(Frame {
            depth: 0,
            body_depth: None,
            element: Element::new("", tag.lexeme.as_str()),
        });
    }

    /// Place a line introduced by INDENT.
    pub fn descend(&mut self, transition: &Token, node: Node) -> Result<(), ParseError> {
        trace!(line = transition.line, depth = transition.depth(), "descend");
        self.place(transition, node)
    }

    /// Place a line introduced by UNINDENT.
    pub fn ascend(&mut self, transition: &Token, node: Node) -> Result<(), ParseError> {
        trace!(line = transition.line, depth = transition.depth(), "ascend");
        self.place(transition, node)
    }

    /// Attach an attribute to the innermost open element.
    pub fn attach_attribute(&mut self, attribute: Attribute) -> Result<(), ParseError> {
        let frame = self.frames.last_mut().ok_or(ParseError::EmptyDocument)?;
        frame.element.push(Node::Attribute(attribute));
        Ok(())
    }

    /// Close every open element and return the root.
    pub fn finish(mut self) -> Result<Element, ParseError> {
        while self.frames.len() > 1 {
            self.close_innermost();
        }
        self.frames
            .pop()
            .map(|frame| frame.element)
            .ok_or(ParseError::EmptyDocument)
    }

    fn place(&mut self, transition: &Token, node: Node) -> Result<(), ParseError> {
        let depth = transition.depth();
        while self.frames.len() > 1 && self.frames.last().is_some_and(|f| f.depth >= depth) {
            self.close_innermost();
        }

        {
            let container = self.frames.last_mut().ok_or(ParseError::EmptyDocument)?;
            let misplaced = ParseError::Indentation {
                line: transition.line,
                depth,
            };
            if depth <= container.depth {
                return Err(misplaced);
            }
            match container.body_depth {
                None => container.body_depth = Some(depth),
                Some(expected) if expected != depth => return Err(misplaced),
                Some(_) => {}
            }
        }

        match node {
            Node::Element(element) => self.frames.push(Frame {
                depth,
                body_depth: None,
                element,
            }),
            other => {
                if let Some(container) = self.frames.last_mut() {
                    container.element.push(other);
                }
            }
        }
        Ok(())
    }

    fn close_innermost(&mut self) {
        if let Some(frame) = self.frames.pop() {
            trace!(tag = %frame.element.tag, "closing element");
            match self.frames.last_mut() {
                Some(parent) => parent.element.push(Node::Element(frame.element)),
                None => self.frames.push(frame),
            }
        }
    }
}

fn line_node(shape: Shape, tokens: &[Token]) -> Node {
    match shape {
        Shape::Element => Node::Element(Element::new(
            tokens[0].lexeme.as_str(),
            tokens[1].lexeme.as_str(),
        )),
        Shape::Attribute => Node::Attribute(Attribute::new(&tokens[1].lexeme, &tokens[3].lexeme)),
        Shape::Text => Node::Text(Text::new(tokens[2].lexeme.as_str())),
    }
}
