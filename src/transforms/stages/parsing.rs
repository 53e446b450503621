//! Parsing stage
//!
//! Matches the grammar over classified tokens and builds the element tree.

use crate::ast::Element;
use crate::error::CompileError;
use crate::parsing;
use crate::token::Token;
use crate::transforms::Runnable;

#[derive(Debug, Default, Clone, Copy)]
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Runnable<Vec<Token>, Element> for Parsing {
    fn run(&self, input: Vec<Token>) -> Result<Element, CompileError> {
        Ok(parsing::parse(&input)?)
    }
}
