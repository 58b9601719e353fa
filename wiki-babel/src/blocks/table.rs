//! `||`-delimited tables with header cells and spans

use crate::format::{BlockFormatter, Formatted};
use crate::html::{count_start_char, end_tag, start_tag};
use crate::inline::InlineFormatter;

/// Consecutive lines starting with `||` form one table. Within a cell, a
/// leading `!` makes a header, then `^` repeated N times spans N+1 rows and
/// `>` repeated N times spans N+1 columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableBlock;

const CELL_SEPARATOR: &str = "||";

fn format_cell(cell: &str, inline: &InlineFormatter) -> String {
    let (tag, cell) = match cell.strip_prefix('!') {
        Some(rest) => ("th", rest),
        None => ("td", cell),
    };

    let mut attributes: Vec<(&str, String)> = Vec::new();
    let rowspan = count_start_char(cell, '^');
    let cell = &cell[rowspan..];
    if rowspan > 0 {
        attributes.push(("rowspan", (rowspan + 1).to_string()));
    }
    let colspan = count_start_char(cell, '>');
    let cell = &cell[colspan..];
    if colspan > 0 {
        attributes.push(("colspan", (colspan + 1).to_string()));
    }

    let attributes: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    format!(
        "{}{}{}",
        start_tag(tag, &attributes),
        inline.format(cell),
        end_tag(tag)
    )
}

fn format_row(row: &str, inline: &InlineFormatter) -> String {
    let cells: String = row
        .split(CELL_SEPARATOR)
        .skip(1)
        .map(|cell| format_cell(cell, inline))
        .collect();
    format!("<tr>{cells}</tr>")
}

impl BlockFormatter for TableBlock {
    fn name(&self) -> &str {
        "table"
    }

    fn description(&self) -> &str {
        "Tables with '||' separated cells"
    }

    fn can_handle(&self, lines: &[&str], index: usize) -> bool {
        lines[index].starts_with(CELL_SEPARATOR)
    }

    fn format(&self, lines: &[&str], index: usize, inline: &InlineFormatter) -> Formatted {
        let rows: String = lines[index..]
            .iter()
            .take_while(|line| line.starts_with(CELL_SEPARATOR))
            .map(|row| format_row(row, inline))
            .collect();
        let consumed = lines[index..]
            .iter()
            .take_while(|line| line.starts_with(CELL_SEPARATOR))
            .count();
        Formatted::new(
            format!("<table border=\"1\">{rows}</table>"),
            index + consumed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_handle() {
        assert!(TableBlock.can_handle(&["||heading||"], 0));
        for line in ["! heading", " ||heading||", "heading"] {
            assert!(!TableBlock.can_handle(&[line], 0), "{line:?}");
        }
    }

    #[test]
    fn test_header_and_spans() {
        let formatted = TableBlock.format(&["||!A||^>B"], 0, &InlineFormatter::default());
        assert_eq!(
            formatted.html,
            "<table border=\"1\"><tr><th>A</th><td rowspan='2' colspan='2'>B</td></tr></table>"
        );
        assert_eq!(formatted.next, 1);
    }

    #[test]
    fn test_multiple_rows_stop_at_other_line() {
        let lines = ["||a||b", "||c||d", "text"];
        let formatted = TableBlock.format(&lines, 0, &InlineFormatter::default());
        assert_eq!(
            formatted.html,
            "<table border=\"1\"><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"
        );
        assert_eq!(formatted.next, 2);
    }

    #[test]
    fn test_trailing_separator_yields_empty_cell() {
        let formatted = TableBlock.format(&["||heading||"], 0, &InlineFormatter::default());
        assert_eq!(
            formatted.html,
            "<table border=\"1\"><tr><td>heading</td><td></td></tr></table>"
        );
    }

    #[test]
    fn test_multiple_spans() {
        let formatted = TableBlock.format(&["||!^^>>>x"], 0, &InlineFormatter::default());
        assert_eq!(
            formatted.html,
            "<table border=\"1\"><tr><th rowspan='3' colspan='4'>x</th></tr></table>"
        );
    }
}
