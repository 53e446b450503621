//! Treeviz formatter for element trees
//!
//! One line per node, nesting drawn with box connectors, so the shape the parser built can
//! be checked at a glance:
//!
//! ```text
//! ⧉ div1
//! ├─ ≔ class='window'
//! ├─ ¶ test123
//! └─ § div2
//!   └─ ¶ test123456
//! ```
//!
//! Icons
//!     Root: ⧉
//!     Element: §
//!     Attribute: ≔
//!     Text: ¶
//!
//! Labels longer than 30 characters are truncated. Newlines in text show as ↵.

use super::error::FormatError;
use super::format::Format;
use crate::ast::{AstNode, Element, Node};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Element" => "§",
        "Attribute" => "≔",
        "Text" => "¶",
        _ => "○",
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type()),
        truncate(&node.display_label(), 30)
    ));

    if let Node::Element(element) = node {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(element, &child_prefix, output);
    }
}

fn format_children(element: &Element, prefix: &str, output: &mut String) {
    let count = element.children.len();
    for (idx, child) in element.children.iter().enumerate() {
        format_node(child, prefix, idx + 1 == count, output);
    }
}

pub fn to_treeviz_str(root: &Element) -> String {
    let mut output = format!("⧉ {}\n", truncate(&root.display_label(), 30));
    format_children(root, "", &mut output);
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Default, Clone, Copy)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with connectors and Unicode icons"
    }

    fn serialize(&self, root: &Element) -> Result<String, FormatError> {
        Ok(to_treeviz_str(root))
    }
}
