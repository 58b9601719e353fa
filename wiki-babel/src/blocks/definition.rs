//! `:term:definition` lists

use crate::format::{BlockFormatter, Formatted};
use crate::html::element;
use crate::inline::InlineFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct DefinitionListBlock;

/// Splits `:term:definition` at the first `:` after the leading one.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.strip_prefix(':')?.split_once(':')
}

impl BlockFormatter for DefinitionListBlock {
    fn name(&self) -> &str {
        "definition-list"
    }

    fn description(&self) -> &str {
        "Definition lists written as ':term:definition'"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        let line = lines[index];
        line.starts_with(':') && line.rfind(':').is_some_and(|pos| pos > 1)
    }

    fn format(&self, lines: &[&str], mut index: usize, inline: &InlineFormatter) -> Formatted {
        let mut entries = String::new();
        while let Some((term, definition)) = lines.get(index).and_then(|line| split_entry(line)) {
            entries.push_str(&element("dt", &inline.format(term)));
            entries.push_str(&element("dd", &inline.format(definition)));
            index += 1;
        }
        Formatted::new(element("dl", &entries), index)
    }
}
