use crate::format::{BlockFormatter, Formatted};
use crate::inline::InlineFormatter;

/// `//` lines are dropped from the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentBlock;

impl BlockFormatter for CommentBlock {
    fn name(&self) -> &str {
        "comment"
    }

    fn description(&self) -> &str {
        "Comment lines starting with '//'"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        lines[index].starts_with("//")
    }

    fn format(&self, _lines: &[&str], index: usize, _inline: &InlineFormatter) -> Formatted {
        Formatted::new("", index + 1)
    }
}
