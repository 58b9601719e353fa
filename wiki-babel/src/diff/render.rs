//! Presenting diff runs
//!
//! Three renderings are offered: a unified listing with one prefixed line
//! per element, rows pairing the two sides for a two-column view, and a
//! plain-text table of those rows.

use super::{DiffPart, DiffRun};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// How a diff is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffStyle {
    #[default]
    Unified,
    SideBySide,
    Json,
}

impl DiffStyle {
    pub const NAMES: &'static [&'static str] = &["unified", "side-by-side", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStyle::Unified => "unified",
            DiffStyle::SideBySide => "side-by-side",
            DiffStyle::Json => "json",
        }
    }
}

impl FromStr for DiffStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unified" => Ok(DiffStyle::Unified),
            "side-by-side" => Ok(DiffStyle::SideBySide),
            "json" => Ok(DiffStyle::Json),
            other => Err(FormatError::UnknownStyle(other.to_string())),
        }
    }
}

/// Kind of a paired row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Share,
    From,
    To,
    /// A removed element replaced by an added one.
    Change,
}

impl RowKind {
    fn marker(&self) -> char {
        match self {
            RowKind::Share => ' ',
            RowKind::From => '<',
            RowKind::To => '>',
            RowKind::Change => '|',
        }
    }
}

/// One row of a two-column view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow<T> {
    pub kind: RowKind,
    pub left: Option<T>,
    pub right: Option<T>,
}

fn prefix(part: DiffPart) -> &'static str {
    match part {
        DiffPart::Share => "  ",
        DiffPart::From => "- ",
        DiffPart::To => "+ ",
    }
}

/// One line per element: `"  "` shared, `"- "` removed, `"+ "` added.
pub fn render_unified<T: Display>(runs: &[DiffRun<T>]) -> String {
    let mut output = String::new();
    for run in runs {
        for line in &run.lines {
            output.push_str(prefix(run.part));
            output.push_str(&line.to_string());
            output.push('\n');
        }
    }
    output
}

/// Pairs the two sides row by row.
///
/// A `From` run directly followed by a `To` run is zipped into `Change`
/// rows; whichever side is longer continues with one-sided rows.
pub fn side_by_side<T: Clone>(runs: &[DiffRun<T>]) -> Vec<DiffRow<T>> {
    let mut rows = Vec::new();
    let mut iter = runs.iter().peekable();

    while let Some(run) = iter.next() {
        match run.part {
            DiffPart::Share => rows.extend(run.lines.iter().map(|line| DiffRow {
                kind: RowKind::Share,
                left: Some(line.clone()),
                right: Some(line.clone()),
            })),
            DiffPart::From => {
                let added: &[T] = match iter.peek() {
                    Some(next) if next.part == DiffPart::To => {
                        let lines = &next.lines;
                        iter.next();
                        lines
                    }
                    _ => &[],
                };
                let height = run.lines.len().max(added.len());
                rows.extend((0..height).map(|i| {
                    let left = run.lines.get(i).cloned();
                    let right = added.get(i).cloned();
                    let kind = match (&left, &right) {
                        (Some(_), Some(_)) => RowKind::Change,
                        (Some(_), None) => RowKind::From,
                        _ => RowKind::To,
                    };
                    DiffRow { kind, left, right }
                }));
            }
            DiffPart::To => rows.extend(run.lines.iter().map(|line| DiffRow {
                kind: RowKind::To,
                left: None,
                right: Some(line.clone()),
            })),
        }
    }
    rows
}

/// Plain-text two-column table. The left column is padded or cut to
/// `width` characters.
pub fn render_side_by_side<T: Display>(rows: &[DiffRow<T>], width: usize) -> String {
    let mut output = String::new();
    for row in rows {
        let left: String = row
            .left
            .as_ref()
            .map(|line| line.to_string().chars().take(width).collect())
            .unwrap_or_default();
        let right = row
            .right
            .as_ref()
            .map(|line| line.to_string())
            .unwrap_or_default();
        let line = format!("{left:<width$} {} {right}", row.kind.marker());
        if right.is_empty() {
            output.push_str(line.trim_end());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }
    output
}
