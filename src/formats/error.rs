//! Format errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No format registered under this name.
    #[error("format '{0}' not found")]
    FormatNotFound(String),
}
