//! Ordered and unordered lists, nested by marker depth

use crate::format::{BlockFormatter, Formatted};
use crate::html::{count_start_char, element};
use crate::inline::InlineFormatter;

/// `#` opens an ordered list, `*` an unordered one. Repeating the marker
/// nests the item one level deeper inside the previous item.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListBlock;

impl ListBlock {
    fn format_list(
        &self,
        lines: &[&str],
        mut index: usize,
        level: usize,
        inline: &InlineFormatter,
    ) -> Formatted {
        let ordered = lines[index].starts_with('#');
        let marker = if ordered { '#' } else { '*' };
        let mut items = String::new();

        while index < lines.len() {
            let line = lines[index];
            if count_start_char(line, marker) < level {
                break;
            }
            items.push_str("<li>");
            items.push_str(&inline.format(&line[level..]));
            index += 1;

            if index < lines.len() && count_start_char(lines[index], marker) > level {
                let nested = self.format_list(lines, index, level + 1, inline);
                items.push_str(&nested.html);
                index = nested.next;
            }
            items.push_str("</li>");
        }

        let tag = if ordered { "ol" } else { "ul" };
        Formatted::new(element(tag, &items), index)
    }
}

impl BlockFormatter for ListBlock {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Ordered ('#') and unordered ('*') lists"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        lines[index].starts_with(['#', '*'])
    }

    fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted {
        self.format_list(lines, index, 1, inline)
    }
}
