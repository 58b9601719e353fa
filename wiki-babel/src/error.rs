//! Error types for formatter and renderer lookups

use std::fmt;

/// Errors that can occur when selecting formatters or renderers.
///
/// The formatting and diff engines themselves are total; these errors only
/// come from name-based lookups at the edges.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Block formatter not found in registry
    BlockNotFound(String),
    /// Unknown diff rendering style
    UnknownStyle(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::BlockNotFound(name) => write!(f, "Block formatter '{name}' not found"),
            FormatError::UnknownStyle(name) => write!(f, "Unknown diff style '{name}'"),
        }
    }
}

impl std::error::Error for FormatError {}
