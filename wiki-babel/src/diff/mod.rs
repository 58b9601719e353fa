//! Line diffs between two revisions
//!
//! [`extract_diff`] turns the shortest edit path found by
//! [`graph::find_edit_graph`] into runs of shared, removed and added
//! elements:
//!
//! ```
//! use wiki_babel::diff::{extract_diff, DiffPart, DiffRun};
//!
//! let runs = extract_diff(&["a", "b", "c"], &["a", "x", "c"]);
//! assert_eq!(
//!     runs,
//!     vec![
//!         DiffRun::new(DiffPart::Share, vec!["a"]),
//!         DiffRun::new(DiffPart::From, vec!["b"]),
//!         DiffRun::new(DiffPart::To, vec!["x"]),
//!         DiffRun::new(DiffPart::Share, vec!["c"]),
//!     ]
//! );
//! ```
//!
//! Concatenating the `Share` and `From` runs gives back the left side;
//! `Share` and `To` give back the right side. Two neighbouring runs never
//! have the same part.

pub mod graph;
pub mod render;

pub use graph::{find_edit_graph, EditGraph, EditNode};
pub use render::{render_side_by_side, render_unified, side_by_side, DiffRow, DiffStyle, RowKind};

use serde::Serialize;

/// Which side(s) of the comparison a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffPart {
    /// Present on both sides.
    Share,
    /// Only on the left (old) side.
    From,
    /// Only on the right (new) side.
    To,
}

/// A maximal run of consecutive elements with the same [`DiffPart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRun<T> {
    pub part: DiffPart,
    pub lines: Vec<T>,
}

impl<T> DiffRun<T> {
    pub fn new(part: DiffPart, lines: Vec<T>) -> Self {
        DiffRun { part, lines }
    }
}

/// Compares two sequences and returns the runs of the shortest edit script.
///
/// Identical inputs give a single `Share` run; two empty inputs give no runs.
pub fn extract_diff<T: PartialEq + Clone>(lhs: &[T], rhs: &[T]) -> Vec<DiffRun<T>> {
    let graph = find_edit_graph(lhs, rhs);
    tracing::debug!(
        left = lhs.len(),
        right = rhs.len(),
        distance = graph.distance(),
        "extracted diff"
    );

    // Built back to front, then flipped.
    let mut runs: Vec<DiffRun<T>> = Vec::new();
    let mut node = graph.terminal();
    while let Some(prev_index) = node.prev {
        let prev = graph.node(prev_index);
        let dx = node.x - prev.x;
        let dy = node.y - prev.y;
        let shared = dx.min(dy);

        push_reversed(&mut runs, DiffPart::Share, &lhs[node.x - shared..node.x]);
        if dx > dy {
            push_reversed(&mut runs, DiffPart::From, &lhs[prev.x..prev.x + (dx - dy)]);
        } else if dy > dx {
            push_reversed(&mut runs, DiffPart::To, &rhs[prev.y..prev.y + (dy - dx)]);
        }
        node = prev;
    }
    push_reversed(&mut runs, DiffPart::Share, &lhs[..node.x]);

    runs.reverse();
    for run in &mut runs {
        run.lines.reverse();
    }
    runs
}

fn push_reversed<T: Clone>(runs: &mut Vec<DiffRun<T>>, part: DiffPart, lines: &[T]) {
    if lines.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(run) if run.part == part => run.lines.extend(lines.iter().rev().cloned()),
        _ => runs.push(DiffRun::new(part, lines.iter().rev().cloned().collect())),
    }
}

/// Rebuilds the left side from `Share` and `From` runs.
pub fn left_lines<T: Clone>(runs: &[DiffRun<T>]) -> Vec<T> {
    side_lines(runs, DiffPart::From)
}

/// Rebuilds the right side from `Share` and `To` runs.
pub fn right_lines<T: Clone>(runs: &[DiffRun<T>]) -> Vec<T> {
    side_lines(runs, DiffPart::To)
}

fn side_lines<T: Clone>(runs: &[DiffRun<T>], own: DiffPart) -> Vec<T> {
    runs.iter()
        .filter(|run| run.part == DiffPart::Share || run.part == own)
        .flat_map(|run| run.lines.iter().cloned())
        .collect()
}
