//! Transformations applied after base tokenization.

pub mod classification;
pub mod line_scanning;

pub use classification::classify;
pub use line_scanning::{scan_lines, LineScanner};
