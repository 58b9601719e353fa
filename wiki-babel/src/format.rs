//! Block formatter trait definition
//!
//! This module defines the core BlockFormatter trait that every block-level
//! markup construct implements. The document formatter walks the line array
//! with a cursor and hands each position to the first block formatter that
//! claims it.

use crate::inline::InlineFormatter;
use serde::Serialize;

/// Options that change how inline text is translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    /// Accept `file:` URLs in auto-links and bracketed links.
    pub allow_file_scheme: bool,
}

impl FormatOptions {
    pub fn new(allow_file_scheme: bool) -> Self {
        FormatOptions { allow_file_scheme }
    }
}

/// HTML produced by a block formatter together with the cursor position
/// where the next block starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub html: String,
    pub next: usize,
}

impl Formatted {
    pub fn new(html: impl Into<String>, next: usize) -> Self {
        Formatted {
            html: html.into(),
            next,
        }
    }
}

/// Trait for block-level markup constructs
///
/// Implementors recognize whether the line at `index` opens their block and,
/// if so, consume one or more lines starting there.
///
/// # Examples
///
/// ```ignore
/// struct QuoteBlock;
///
/// impl BlockFormatter for QuoteBlock {
///     fn name(&self) -> &str {
///         "quote"
///     }
///
///     fn can_handle(&self, lines: &[&str], index: usize) -> bool {
///         lines[index].starts_with('>')
///     }
///
///     fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted {
///         let text = inline.format(&lines[index][1..]);
///         Formatted::new(format!("<blockquote>{text}</blockquote>"), index + 1)
///     }
/// }
/// ```
pub trait BlockFormatter: Send + Sync {
    /// The name of this block (e.g., "heading", "table")
    fn name(&self) -> &str;

    /// Optional description of this block
    fn description(&self) -> &str {
        ""
    }

    /// Whether the line at `index` opens this block.
    ///
    /// Callers guarantee `index < lines.len()`.
    fn can_handle(&self, lines: &[&str], index: usize) -> bool;

    /// Consume the block starting at `index`.
    ///
    /// Only called after [`BlockFormatter::can_handle`] returned true for the
    /// same position. The returned `next` must be greater than `index`.
    fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted;
}
