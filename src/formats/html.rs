//! HTML format implementation
//!
//! | Node | Output |
//! |------|--------|
//! | Element | `{indent}<tag attrs>` ... `{indent}</tag>`, each on its own line |
//! | Attribute | ` name='value'` inside the opening tag of its element |
//! | Text | the value, verbatim, on its own line(s) |
//!
//! Lines are joined with `\n` and the output has no trailing newline.

pub mod serializer;

pub use serializer::{render, HtmlSerializer};

use super::error::FormatError;
use super::format::Format;
use crate::ast::Element;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML with the source's indentation, attributes and text emitted verbatim"
    }

    fn serialize(&self, root: &Element) -> Result<String, FormatError> {
        Ok(render(root))
    }
}
