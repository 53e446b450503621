//! Serialization stage
//!
//! Renders the element tree with a format looked up by name in the default registry.

use crate::ast::Element;
use crate::error::CompileError;
use crate::formats::FormatRegistry;
use crate::transforms::Runnable;

pub struct Serialization {
    registry: FormatRegistry,
    format: String,
}

impl Serialization {
    pub fn new(format: impl Into<String>) -> Self {
        Serialization {
            registry: FormatRegistry::with_defaults(),
            format: format.into(),
        }
    }
}

impl Runnable<Element, String> for Serialization {
    fn run(&self, input: Element) -> Result<String, CompileError> {
        Ok(self.registry.serialize(&input, &self.format)?)
    }
}
