use wiki_babel::diff::{
    extract_diff, render_side_by_side, render_unified, side_by_side, DiffPart, DiffRun,
};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn test_single_line_change() {
    let runs = extract_diff(&["a", "b", "c"], &["a", "x", "c"]);
    assert_eq!(
        runs,
        vec![
            DiffRun::new(DiffPart::Share, vec!["a"]),
            DiffRun::new(DiffPart::From, vec!["b"]),
            DiffRun::new(DiffPart::To, vec!["x"]),
            DiffRun::new(DiffPart::Share, vec!["c"]),
        ]
    );
}

#[test]
fn test_identical_revisions() {
    let text = lines("! Title\n\nbody");
    assert_eq!(
        extract_diff(&text, &text),
        vec![DiffRun::new(DiffPart::Share, text.clone())]
    );
}

#[test]
fn test_page_revision_unified() {
    let old = lines("! Notes\n* buy milk\n* call Bob\n\nSee FrontPage");
    let new = lines("! Notes\n* buy milk\n* buy bread\n\nSee FrontPage\n----");
    let runs = extract_diff(&old, &new);

    assert_eq!(
        render_unified(&runs),
        "  ! Notes\n  * buy milk\n- * call Bob\n+ * buy bread\n  \n  See FrontPage\n+ ----\n"
    );
}

#[test]
fn test_page_revision_side_by_side() {
    let old = lines("alpha\nbeta\ngamma");
    let new = lines("alpha\ngamma\ndelta");
    let rows = side_by_side(&extract_diff(&old, &new));

    assert_eq!(
        render_side_by_side(&rows, 8),
        "alpha      alpha\nbeta     <\ngamma      gamma\n         > delta\n"
    );
}

#[test]
fn test_runs_serialize_to_json() {
    let runs = extract_diff(&["a"], &["b"]);
    let json = serde_json::to_value(&runs).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "part": "from", "lines": ["a"] },
            { "part": "to", "lines": ["b"] }
        ])
    );
}

#[test]
fn test_diff_over_characters() {
    let lhs: Vec<char> = "kitten".chars().collect();
    let rhs: Vec<char> = "sitting".chars().collect();
    let runs = extract_diff(&lhs, &rhs);
    let shared: String = runs
        .iter()
        .filter(|run| run.part == DiffPart::Share)
        .flat_map(|run| run.lines.iter())
        .collect();
    assert_eq!(shared, "ittn");
}
