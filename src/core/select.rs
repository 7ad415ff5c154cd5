//! UCT child selection.

use crate::core::tree::TreeNode;

/// UCT score of `child` as seen from a parent with `parent_visits` visits.
///
/// The degenerate inputs are explicit branches rather than special cases
/// of the formula: an unvisited child must be explored before any visited
/// sibling, and an unvisited parent leaves the exploration bound
/// undefined, so the child scores its own mean value. Neither case can
/// produce a NaN. Negative inputs are a caller bug and fail fast.
pub fn uct_score(child: &TreeNode, parent_visits: f64, c: f64) -> f64 {
    assert!(c >= 0.0, "exploration constant must be non-negative");
    assert!(
        child.visits >= 0.0 && parent_visits >= 0.0,
        "visit counts must be non-negative"
    );

    if child.visits == 0.0 {
        return f64::INFINITY;
    }
    if parent_visits == 0.0 {
        return child.value;
    }
    child.value + c * (2.0 * parent_visits.ln() / child.visits).sqrt()
}

/// Index of the child of `node` with the greatest UCT score under
/// exploration constant `c`; the first encountered wins ties. `None` for
/// a childless node.
pub fn best_child_index(node: &TreeNode, c: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, edge) in node.edges.iter().enumerate() {
        let score = uct_score(&edge.child, node.visits, c);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// The child of `node` maximizing the UCT score.
pub fn best_child(node: &TreeNode, c: f64) -> Option<&TreeNode> {
    best_child_index(node, c).map(|index| &node.edges[index].child)
}
