//! The search tree: nodes, edges, and lazy expansion.

use crate::core::state::{StoryState, WorldError};
use crate::schema::action::Action;

/// One instantiated transition, created at expansion time and never
/// re-targeted. The edge owns the child it leads to.
#[derive(Debug)]
pub struct TreeEdge {
    pub action: Action,
    pub child: TreeNode,
}

/// A search-tree node wrapping one story snapshot plus UCT statistics.
///
/// `visits` is an f64 because weighted visit schemes assign fractional
/// counts. `value` is a running mean reward, not a raw sum.
#[derive(Debug)]
pub struct TreeNode {
    pub state: StoryState,
    pub visits: f64,
    pub value: f64,
    pub edges: Vec<TreeEdge>,
    /// Precomputed action space; entries before `cursor` have been
    /// instantiated as edges.
    actions: Vec<Action>,
    cursor: usize,
}

impl TreeNode {
    pub fn new(state: StoryState) -> Self {
        let actions = state.action_space();
        Self {
            state,
            visits: 0.0,
            value: 0.0,
            edges: Vec::new(),
            actions,
            cursor: 0,
        }
    }

    /// Size of this node's full action space.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// True once every action in the action space has an edge.
    pub fn fully_expanded(&self) -> bool {
        self.cursor == self.actions.len()
    }

    /// Instantiate the next untried action as a new edge and child.
    ///
    /// Returns the index of the new edge, or `None` once the action space
    /// is exhausted. The node's own snapshot and existing children are
    /// left untouched; only the edge list and the cursor change.
    pub fn expand_child(&mut self) -> Result<Option<usize>, WorldError> {
        let Some(&action) = self.actions.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        let child_state = self.state.apply(&action)?;
        self.edges.push(TreeEdge {
            action,
            child: TreeNode::new(child_state),
        });
        Ok(Some(self.edges.len() - 1))
    }

    /// Expand every remaining action: one child per action-space entry.
    pub fn expand_all_children(&mut self) -> Result<(), WorldError> {
        while self.expand_child()?.is_some() {}
        Ok(())
    }

    /// Fold a new reward into this node's statistics, keeping `value` a
    /// running mean.
    pub fn record(&mut self, reward: f64) {
        self.visits += 1.0;
        self.value += (reward - self.value) / self.visits;
    }
}

/// Owns the root node; every other node is reachable through exactly one
/// edge, so the structure is acyclic by construction.
#[derive(Debug)]
pub struct Tree {
    pub root: TreeNode,
}

impl Tree {
    pub fn new(root_state: StoryState) -> Self {
        Self {
            root: TreeNode::new(root_state),
        }
    }
}
