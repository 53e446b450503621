//! AST traits - Common interfaces for uniform node access

use super::elements::{Attribute, Element, Text};

/// Visitor trait for traversing the element tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
/// Children are visited in declaration order, attributes included, between `visit_element`
/// and `leave_element`.
///
/// # Example
///
/// ```ignore
/// struct TagCounter(usize);
///
/// impl Visitor for TagCounter {
///     fn visit_element(&mut self, _element: &Element) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = TagCounter(0);
/// root.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_element(&mut self, _element: &Element) {}
    fn leave_element(&mut self, _element: &Element) {}

    fn visit_attribute(&mut self, _attribute: &Attribute) {}

    fn visit_text(&mut self, _text: &Text) {}
}

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
