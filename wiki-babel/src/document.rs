//! Whole-document formatting
//!
//! Splits content into lines and walks them with a cursor. Blank lines are
//! skipped; every other line is handed to the first registered block that
//! claims it, and the cursor jumps to where that block ended.

use crate::blocks::is_blank;
use crate::format::FormatOptions;
use crate::inline::InlineFormatter;
use crate::registry::BlockRegistry;

/// Formats wiki markup documents into HTML fragments.
pub struct WikiFormatter {
    registry: BlockRegistry,
    inline: InlineFormatter,
}

impl WikiFormatter {
    /// Formatter with the built-in blocks.
    pub fn new(options: FormatOptions) -> Self {
        Self::with_registry(BlockRegistry::with_defaults(), options)
    }

    pub fn with_registry(registry: BlockRegistry, options: FormatOptions) -> Self {
        WikiFormatter {
            registry,
            inline: InlineFormatter::new(options),
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn format(&self, content: &str) -> String {
        let lines: Vec<&str> = content.lines().collect();
        self.format_lines(&lines)
    }

    pub fn format_lines(&self, lines: &[&str]) -> String {
        let mut html = String::new();
        let mut index = 0;

        while index < lines.len() {
            if is_blank(lines[index]) {
                index += 1;
                continue;
            }
            let Some(block) = self.registry.find(lines, index) else {
                tracing::trace!(line = index, "no block claims line");
                index += 1;
                continue;
            };

            let formatted = block.format(lines, index, &self.inline);
            tracing::trace!(
                block = block.name(),
                start = index,
                end = formatted.next,
                "formatted block"
            );
            debug_assert!(
                formatted.next > index,
                "block '{}' did not advance",
                block.name()
            );
            // a misbehaving custom block must not stall the loop
            index = formatted.next.max(index + 1);
            html.push_str(&formatted.html);
        }

        tracing::debug!(lines = lines.len(), bytes = html.len(), "formatted document");
        html
    }
}

impl Default for WikiFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}
