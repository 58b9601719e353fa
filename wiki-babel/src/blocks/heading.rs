//! `!`-prefixed headings

use crate::format::{BlockFormatter, Formatted};
use crate::html::{count_start_char, element};
use crate::inline::InlineFormatter;

const MAX_LEVEL: usize = 4;

/// One to four `!` produce `<h2>` through `<h5>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadingBlock;

impl BlockFormatter for HeadingBlock {
    fn name(&self) -> &str {
        "heading"
    }

    fn description(&self) -> &str {
        "Headings marked with 1 to 4 leading '!'"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        let line = lines[index];
        let level = count_start_char(line, '!');
        (1..=MAX_LEVEL).contains(&level)
            && !line[level..].trim_start_matches([' ', '\u{3000}']).is_empty()
    }

    fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted {
        let line = lines[index];
        let level = count_start_char(line, '!');
        let tag = format!("h{}", level + 1);
        Formatted::new(element(&tag, &inline.format(&line[level..])), index + 1)
    }
}
