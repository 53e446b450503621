//! Output formats
//!
//!     - [`Format`] trait: uniform interface for turning an element tree into text
//!     - [`FormatRegistry`]: discovery and selection of formats by name
//!     - Built-in formats: [`html`] (the compiler's output) and [`treeviz`] (a debugging view
//!       of the tree)

pub mod error;
pub mod format;
pub mod html;
pub mod registry;
pub mod treeviz;

pub use error::FormatError;
pub use format::Format;
pub use html::HtmlFormat;
pub use registry::FormatRegistry;
pub use treeviz::TreevizFormat;
