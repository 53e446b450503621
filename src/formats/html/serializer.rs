//! HTML serialization (element tree → HTML text)
//!
//! A visitor that emits one line per tag and per text node. Attributes are pulled out of the
//! children into the opening tag as `name='value'`, in declaration order. Nothing is escaped:
//! values and text are written exactly as they appeared between the quotes.

use crate::ast::{AstNode, Element, Text, Visitor};

#[derive(Debug, Default)]
pub struct HtmlSerializer {
    lines: Vec<String>,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output lines joined by `\n`, without a trailing newline.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl Visitor for HtmlSerializer {
    fn visit_element(&mut self, element: &Element) {
        let mut open = format!("{}<{}", element.indent, element.tag);
        for attribute in element.attributes() {
            open.push_str(&format!(" {}='{}'", attribute.name, attribute.value));
        }
        open.push('>');
        self.lines.push(open);
    }

    fn leave_element(&mut self, element: &Element) {
        self.lines.push(format!("{}</{}>", element.indent, element.tag));
    }

    fn visit_text(&mut self, text: &Text) {
        self.lines.push(text.value.clone());
    }
}

/// Render an element tree as HTML.
pub fn render(root: &Element) -> String {
    let mut serializer = HtmlSerializer::new();
    root.accept(&mut serializer);
    serializer.finish()
}
