//! Myers shortest edit path search
//!
//! The search explores diagonals `k = x - y` of the edit grid in rounds of
//! increasing edit distance `d`. Each round extends the farthest node of a
//! neighbouring diagonal by one horizontal (delete from the left side) or
//! vertical (insert from the right side) move, then follows the diagonal
//! while both sides agree. The first node reaching the bottom-right corner
//! ends the search.
//!
//! Nodes live in an arena and point to their predecessor by index, so the
//! edit path is recovered by walking back from the terminal node.

/// A point in the edit grid reached after a single edit plus a snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditNode {
    /// Elements consumed from the left sequence.
    pub x: usize,
    /// Elements consumed from the right sequence.
    pub y: usize,
    /// Arena index of the node this one was reached from. `None` for the root.
    pub prev: Option<usize>,
}

/// Every node created by one search, with the terminal node marked.
#[derive(Debug, Clone)]
pub struct EditGraph {
    nodes: Vec<EditNode>,
    terminal: usize,
    distance: usize,
}

impl EditGraph {
    pub fn node(&self, index: usize) -> &EditNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[EditNode] {
        &self.nodes
    }

    /// The node at the bottom-right corner of the grid.
    pub fn terminal(&self) -> &EditNode {
        &self.nodes[self.terminal]
    }

    /// Number of insertions plus deletions on the shortest path.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Nodes on the shortest path, root first.
    pub fn path(&self) -> Vec<&EditNode> {
        let mut path = vec![self.terminal()];
        let mut node = self.terminal();
        while let Some(prev) = node.prev {
            node = self.node(prev);
            path.push(node);
        }
        path.reverse();
        path
    }
}

/// Finds a shortest edit path from `lhs` to `rhs`.
///
/// The farthest-node table is local to the call; nothing is shared between
/// searches.
pub fn find_edit_graph<T: PartialEq>(lhs: &[T], rhs: &[T]) -> EditGraph {
    let n = lhs.len();
    let m = rhs.len();
    let (ni, mi) = (n as isize, m as isize);
    let offset = mi + 1;
    let mut farthest: Vec<Option<usize>> = vec![None; n + m + 3];
    let mut nodes: Vec<EditNode> = Vec::new();

    for d in 0..=(ni + mi) {
        let max_k = d.min(2 * ni - d);
        let min_k = d.min(2 * mi - d);

        let mut k = -min_k;
        while k <= max_k {
            let slot = (offset + k) as usize;
            let start = if d == 0 {
                Some((0, 0, None))
            } else {
                // right move from k - 1, down move from k + 1
                let right = farthest[slot - 1].filter(|&i| nodes[i].x < n);
                let down = farthest[slot + 1].filter(|&i| nodes[i].y < m);
                match (right, down) {
                    (Some(r), Some(dn)) if nodes[r].x < nodes[dn].x => {
                        Some((nodes[dn].x, nodes[dn].y + 1, Some(dn)))
                    }
                    (Some(r), _) => Some((nodes[r].x + 1, nodes[r].y, Some(r))),
                    (None, Some(dn)) => Some((nodes[dn].x, nodes[dn].y + 1, Some(dn))),
                    (None, None) => None,
                }
            };

            let Some((mut x, mut y, prev)) = start else {
                farthest[slot] = None;
                k += 2;
                continue;
            };

            while x < n && y < m && lhs[x] == rhs[y] {
                x += 1;
                y += 1;
            }

            nodes.push(EditNode { x, y, prev });
            farthest[slot] = Some(nodes.len() - 1);

            if x >= n && y >= m {
                tracing::trace!(distance = d, nodes = nodes.len(), "edit graph complete");
                return EditGraph {
                    terminal: nodes.len() - 1,
                    nodes,
                    distance: d as usize,
                };
            }
            k += 2;
        }
    }

    unreachable!("an edit path of length n + m always exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_inputs() {
        let graph = find_edit_graph::<char>(&[], &[]);
        assert_eq!(graph.distance(), 0);
        assert_eq!(graph.terminal(), &EditNode { x: 0, y: 0, prev: None });
    }

    #[test]
    fn test_identical_inputs_are_one_snake() {
        let graph = find_edit_graph(&chars("abc"), &chars("abc"));
        assert_eq!(graph.distance(), 0);
        assert_eq!(graph.nodes().len(), 1);
        assert_eq!(graph.terminal(), &EditNode { x: 3, y: 3, prev: None });
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(find_edit_graph(&chars("abc"), &[]).distance(), 3);
        assert_eq!(find_edit_graph(&[], &chars("ab")).distance(), 2);
    }

    #[test]
    fn test_classic_example_distance() {
        // ABCABBA -> CBABAC has a shortest edit script of 5
        let graph = find_edit_graph(&chars("ABCABBA"), &chars("CBABAC"));
        assert_eq!(graph.distance(), 5);
    }

    #[test]
    fn test_path_is_monotonic_and_inside_grid() {
        let lhs = chars("the quick brown fox");
        let rhs = chars("a quick brown dog jumps");
        let graph = find_edit_graph(&lhs, &rhs);
        let path = graph.path();

        assert_eq!(path.first().map(|n| n.prev), Some(None));
        for pair in path.windows(2) {
            assert!(pair[1].x >= pair[0].x && pair[1].y >= pair[0].y);
            assert!(pair[1].x <= lhs.len() && pair[1].y <= rhs.len());
        }
        let last = path.last().unwrap();
        assert_eq!((last.x, last.y), (lhs.len(), rhs.len()));
    }

    #[test]
    fn test_replacement_distance() {
        let graph = find_edit_graph(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(graph.distance(), 2);
    }
}
