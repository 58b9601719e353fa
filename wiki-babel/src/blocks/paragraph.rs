use super::is_blank;
use crate::format::{BlockFormatter, Formatted};
use crate::html::element;
use crate::inline::InlineFormatter;

/// Fallback block: consecutive non-blank lines, concatenated without a
/// separator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParagraphBlock;

impl BlockFormatter for ParagraphBlock {
    fn name(&self) -> &str {
        "paragraph"
    }

    fn description(&self) -> &str {
        "Any other run of non-blank lines"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        !is_blank(lines[index])
    }

    fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted {
        let text: String = lines[index..]
            .iter()
            .take_while(|line| !is_blank(line))
            .copied()
            .collect();
        let consumed = lines[index..]
            .iter()
            .take_while(|line| !is_blank(line))
            .count();
        Formatted::new(element("p", &inline.format(&text)), index + consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_concatenated() {
        let lines = ["first line", "second", "", "next"];
        let formatted = ParagraphBlock.format(&lines, 0, &InlineFormatter::default());
        assert_eq!(formatted, Formatted::new("<p>first linesecond</p>", 2));
    }

    #[test]
    fn test_blank_lines_are_not_paragraphs() {
        assert!(!ParagraphBlock.can_handle(&[""], 0));
        assert!(!ParagraphBlock.can_handle(&["  \t"], 0));
        assert!(ParagraphBlock.can_handle(&["x"], 0));
    }
}
