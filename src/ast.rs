//! Element tree
//!
//!     The parser produces a single root [`Element`]. Its children are a mix of attributes,
//!     literal text and nested elements, kept in the order they were declared. Attributes live
//!     among the children so that one traversal sees everything; renderers pull them out
//!     into the opening tag.
//!
//!     Nodes are only created while the parser commits a successful match, and after that
//!     only `children` grows. The tree has no back references.

pub mod elements;
pub mod traits;

pub use elements::{Attribute, Element, Node, Text};
pub use traits::{AstNode, Visitor};
