//! Wiki markup formatting, revision diffs and page search
//!
//!     This crate turns the line-oriented wiki markup into HTML fragments and compares page
//!     revisions line by line. It is a pure lib, that is, it powers wiki-cli but is shell
//!     agnostic: no code here should suppose a shell environment, be it std print, env vars etc.
//!     Where pages are stored and how revisions are kept is the caller's business.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # BlockFormatter trait and options
//!     ├── registry.rs             # BlockRegistry, ordered block dispatch
//!     ├── document.rs             # WikiFormatter, the cursor loop over lines
//!     ├── inline.rs               # phrases, links, decorations, escaping
//!     ├── html.rs                 # tag building helpers
//!     ├── blocks
//!     │   └── <block>.rs          # one file per block construct
//!     ├── diff
//!     │   ├── graph.rs            # Myers shortest edit path
//!     │   ├── render.rs           # unified and side-by-side output
//!     │   └── mod.rs              # run extraction
//!     ├── search.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//!
//! Markup Formatting
//!
//!     Formatting is two passes. The block pass walks the lines with a cursor; at each non-blank
//!     line the first block (in registry order) that claims it consumes one or more lines and
//!     reports where the next block starts. The inline pass then handles the text of each block:
//!     auto-links, wiki names, `[[literal|target]]` links and the `'''` / `''` / `==`
//!     decorations, escaping whatever is left.
//!
//!     The formatter is total. Every input produces some HTML; malformed markup degrades to
//!     escaped literal text rather than an error.
//!
//!
//! Diffs
//!
//!     Diffs are computed with Myers' algorithm over any `PartialEq` elements, usually lines.
//!     The result is a list of runs marking what is shared, what only exists on the old side
//!     (`From`) and what only exists on the new side (`To`). See ./diff/mod.rs.
//!
pub mod blocks;
pub mod diff;
pub mod document;
pub mod error;
pub mod format;
pub mod html;
pub mod inline;
pub mod registry;
pub mod search;

pub use diff::{extract_diff, left_lines, right_lines, DiffPart, DiffRun};
pub use document::WikiFormatter;
pub use error::FormatError;
pub use format::{BlockFormatter, FormatOptions, Formatted};
pub use registry::BlockRegistry;

/// Formats wiki markup into an HTML fragment with the built-in blocks.
///
/// ```
/// assert_eq!(
///     wiki_babel::format_markup("!! Title", false),
///     "<h3>Title</h3>"
/// );
/// ```
pub fn format_markup(content: &str, allow_file_scheme: bool) -> String {
    WikiFormatter::new(FormatOptions::new(allow_file_scheme)).format(content)
}
