//! Block-level markup constructs
//!
//! Each block is a unit struct implementing [`BlockFormatter`]. The
//! document formatter asks them in registry order whether the current line
//! opens their block; the first one that answers yes consumes it.
//!
//! | block           | opens on                                   |
//! |-----------------|--------------------------------------------|
//! | heading         | 1 to 4 `!` followed by text                |
//! | list            | `#` (ordered) or `*` (unordered)           |
//! | definition-list | `:term:definition`                         |
//! | table           | `\|\|`                                     |
//! | comment         | `//`                                       |
//! | rule            | exactly `----`                             |
//! | pre             | leading space or tab, or a `<<<` line      |
//! | paragraph       | any other non-blank line                   |
//!
//! [`BlockFormatter`]: crate::format::BlockFormatter

pub mod comment;
pub mod definition;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod preformatted;
pub mod rule;
pub mod table;

pub use comment::CommentBlock;
pub use definition::DefinitionListBlock;
pub use heading::HeadingBlock;
pub use list::ListBlock;
pub use paragraph::ParagraphBlock;
pub use preformatted::PreformattedBlock;
pub use rule::HorizontalRuleBlock;
pub use table::TableBlock;

/// A line with nothing but whitespace separates blocks.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
