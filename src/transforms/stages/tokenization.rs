//! Tokenization stage
//!
//! Runs every lexing pass: source text in, classified tokens out.

use crate::error::CompileError;
use crate::lexing;
use crate::token::Token;
use crate::transforms::Runnable;

#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Runnable<String, Vec<Token>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Token>, CompileError> {
        Ok(lexing::tokenize(&input)?)
    }
}
