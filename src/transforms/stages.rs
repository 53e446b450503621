//! Individual transformation stages

pub mod parsing;
pub mod serialization;
pub mod tokenization;

pub use parsing::Parsing;
pub use serialization::Serialization;
pub use tokenization::Tokenization;
