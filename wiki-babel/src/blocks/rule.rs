use crate::format::{BlockFormatter, Formatted};
use crate::inline::InlineFormatter;

const RULE: &str = "----";

/// A line of exactly four dashes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HorizontalRuleBlock;

impl BlockFormatter for HorizontalRuleBlock {
    fn name(&self) -> &str {
        "rule"
    }

    fn description(&self) -> &str {
        "Horizontal rule written as '----'"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        lines[index] == RULE
    }

    fn format(&self, _lines: &[&str], index: usize, _inline: &InlineFormatter) -> Formatted {
        Formatted::new("<hr />", index + 1)
    }
}
