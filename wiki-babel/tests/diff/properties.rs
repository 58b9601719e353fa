//! Properties of extracted diffs that hold for any pair of inputs

use proptest::prelude::*;
use wiki_babel::diff::{
    extract_diff, find_edit_graph, left_lines, render_unified, right_lines, side_by_side,
    DiffPart,
};

fn sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]", 0..12)
}

/// Length of the longest common subsequence, by dynamic programming.
fn lcs_len(lhs: &[String], rhs: &[String]) -> usize {
    let mut table = vec![vec![0usize; rhs.len() + 1]; lhs.len() + 1];
    for i in 0..lhs.len() {
        for j in 0..rhs.len() {
            table[i + 1][j + 1] = if lhs[i] == rhs[j] {
                table[i][j] + 1
            } else {
                table[i][j + 1].max(table[i + 1][j])
            };
        }
    }
    table[lhs.len()][rhs.len()]
}

proptest! {
    #[test]
    fn runs_reconstruct_both_sides(lhs in sequence(), rhs in sequence()) {
        let runs = extract_diff(&lhs, &rhs);
        prop_assert_eq!(left_lines(&runs), lhs);
        prop_assert_eq!(right_lines(&runs), rhs);
    }

    #[test]
    fn runs_are_maximal_and_non_empty(lhs in sequence(), rhs in sequence()) {
        let runs = extract_diff(&lhs, &rhs);
        for run in &runs {
            prop_assert!(!run.lines.is_empty());
        }
        for pair in runs.windows(2) {
            prop_assert_ne!(pair[0].part, pair[1].part);
        }
    }

    #[test]
    fn identical_inputs_share_everything(lhs in sequence()) {
        let runs = extract_diff(&lhs, &lhs);
        prop_assert!(runs.len() <= 1);
        prop_assert!(runs.iter().all(|run| run.part == DiffPart::Share));
    }

    #[test]
    fn edit_script_is_shortest(lhs in sequence(), rhs in sequence()) {
        let graph = find_edit_graph(&lhs, &rhs);
        let lcs = lcs_len(&lhs, &rhs);
        prop_assert_eq!(graph.distance(), lhs.len() + rhs.len() - 2 * lcs);

        let shared: usize = extract_diff(&lhs, &rhs)
            .iter()
            .filter(|run| run.part == DiffPart::Share)
            .map(|run| run.lines.len())
            .sum();
        prop_assert_eq!(shared, lcs);
    }

    #[test]
    fn unified_output_has_one_line_per_element(lhs in sequence(), rhs in sequence()) {
        let runs = extract_diff(&lhs, &rhs);
        let shared: usize = runs
            .iter()
            .filter(|run| run.part == DiffPart::Share)
            .map(|run| run.lines.len())
            .sum();
        let rendered = render_unified(&runs);
        prop_assert_eq!(rendered.lines().count(), lhs.len() + rhs.len() - shared);
    }

    #[test]
    fn side_by_side_rows_reconstruct_both_sides(lhs in sequence(), rhs in sequence()) {
        let rows = side_by_side(&extract_diff(&lhs, &rhs));
        let left: Vec<String> = rows.iter().filter_map(|row| row.left.clone()).collect();
        let right: Vec<String> = rows.iter().filter_map(|row| row.right.clone()).collect();
        prop_assert_eq!(left, lhs);
        prop_assert_eq!(right, rhs);
    }
}
