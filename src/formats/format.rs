//! Format trait definition
//!
//! Every output representation of an element tree implements [`Format`], so the CLI and the
//! transform pipelines can pick one by name through the
//! [`FormatRegistry`](super::registry::FormatRegistry).

use super::error::FormatError;
use crate::ast::Element;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct TagList;
///
/// impl Format for TagList {
///     fn name(&self) -> &str {
///         "tags"
///     }
///
///     fn serialize(&self, root: &Element) -> Result<String, FormatError> {
///         Ok(root.tag.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize an element tree into text
    fn serialize(&self, root: &Element) -> Result<String, FormatError>;
}
