//! Preformatted text
//!
//! Two forms are recognized:
//!
//! - line mode: consecutive lines starting with a space or a tab
//! - block mode: everything between a `<<<` line and a `>>>` line; an
//!   unterminated block runs to the end of input
//!
//! Lines are trimmed and joined with newlines before inline formatting.

use super::is_blank;
use crate::format::{BlockFormatter, Formatted};
use crate::html::element;
use crate::inline::InlineFormatter;

const BLOCK_OPEN: &str = "<<<";
const BLOCK_CLOSE: &str = ">>>";

#[derive(Debug, Default, Clone, Copy)]
pub struct PreformattedBlock;

impl BlockFormatter for PreformattedBlock {
    fn name(&self) -> &str {
        "pre"
    }

    fn description(&self) -> &str {
        "Indented lines or '<<<' ... '>>>' blocks"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        let line = lines[index];
        line.starts_with([' ', '\t']) || line == BLOCK_OPEN
    }

    fn format(&self, lines: &[&str], mut index: usize, inline: &InlineFormatter) -> Formatted {
        let line_mode = lines[index] != BLOCK_OPEN;
        let mut text: Vec<&str> = Vec::new();

        while index < lines.len() {
            let line = lines[index];
            if line_mode && (is_blank(line) || !self.can_handle(lines, index)) {
                break;
            }
            index += 1;
            if !line_mode && line == BLOCK_CLOSE {
                break;
            }
            if line_mode || line != BLOCK_OPEN {
                text.push(line.trim());
            }
        }

        Formatted::new(element("pre", &inline.format(&text.join("\n"))), index)
    }
}
