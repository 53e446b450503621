//! Element tree nodes

use super::traits::{AstNode, Visitor};
use serde::Serialize;

/// A tagged element. `indent` is the literal leading whitespace of the line that
/// introduced it and is emitted verbatim in front of both tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub indent: String,
    pub tag: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(indent: impl Into<String>, tag: impl Into<String>) -> Self {
        Element {
            indent: indent.into(),
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(
        indent: impl Into<String>,
        tag: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Element {
            indent: indent.into(),
            tag: tag.into(),
            children,
        }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.children.iter().filter_map(|child| match child {
            Node::Attribute(attr) => Some(attr),
            _ => None,
        })
    }
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        "Element"
    }

    fn display_label(&self) -> String {
        self.tag.clone()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_element(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.leave_element(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl AstNode for Attribute {
    fn node_type(&self) -> &'static str {
        "Attribute"
    }

    fn display_label(&self) -> String {
        format!("{}='{}'", self.name, self.value)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_attribute(self);
    }
}

/// Literal text, emitted exactly as written between the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.value.replace('\n', "↵")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
    Text(Text),
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Element(e) => e.node_type(),
            Node::Attribute(a) => a.node_type(),
            Node::Text(t) => t.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Element(e) => e.display_label(),
            Node::Attribute(a) => a.display_label(),
            Node::Text(t) => t.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Element(e) => e.accept(visitor),
            Node::Attribute(a) => a.accept(visitor),
            Node::Text(t) => t.accept(visitor),
        }
    }
}
