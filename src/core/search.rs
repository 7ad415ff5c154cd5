//! The search driver: select → expand → evaluate → backpropagate.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::select::best_child_index;
use crate::core::state::{StoryState, WorldError};
use crate::core::tree::{Tree, TreeEdge, TreeNode};
use crate::schema::action::Action;

/// Tunables for one search run. Built via `SearchConfig::builder()`.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// UCT exploration constant.
    pub exploration: f64,
    /// Number of select/expand/evaluate/backpropagate iterations.
    pub iterations: usize,
    /// Extra random-playout depth past the expanded node; 0 evaluates the
    /// expanded node's own believability only.
    pub rollout_depth: usize,
    /// Seed for the rollout RNG; a fixed seed makes the search repeatable.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: 1.0,
            iterations: 1000,
            rollout_depth: 0,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder {
            config: SearchConfig::default(),
        }
    }
}

/// Builder for `SearchConfig`.
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn exploration(mut self, c: f64) -> Self {
        self.config.exploration = c;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn rollout_depth(mut self, depth: usize) -> Self {
        self.config.rollout_depth = depth;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

/// One step of a discovered narrative.
#[derive(Debug, Clone)]
pub struct NarrativeStep {
    pub action: Action,
    pub label: String,
    pub believability: f64,
}

/// The action sequence a finished search settles on, read off the
/// most-visited chain of children from the root.
#[derive(Debug, Clone, Default)]
pub struct Narrative {
    pub steps: Vec<NarrativeStep>,
    /// Sum of the steps' believabilities.
    pub believability: f64,
}

impl Tree {
    /// Run `config.iterations` search passes over this tree, then read off
    /// the discovered narrative.
    ///
    /// Zero-believability branches explored along the way stay internal;
    /// only unknown-id lookups surface as errors.
    pub fn search(&mut self, config: &SearchConfig) -> Result<Narrative, WorldError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        for iteration in 0..config.iterations {
            let reward = simulate(&mut self.root, config, &mut rng)?;
            trace!("iteration {iteration}: reward {reward:.3}");
        }
        debug!(
            "search finished: {} iterations, {} root children, root value {:.3}",
            config.iterations,
            self.root.edges.len(),
            self.root.value
        );
        Ok(self.narrative())
    }

    /// The most-visited chain of children from the root, stopping at the
    /// first node the search never actually visited.
    pub fn narrative(&self) -> Narrative {
        let mut narrative = Narrative::default();
        let mut node = &self.root;
        while let Some(edge) = most_visited(node) {
            if edge.child.visits == 0.0 {
                break;
            }
            narrative.steps.push(NarrativeStep {
                action: edge.action,
                label: edge.child.state.label.clone(),
                believability: edge.child.state.believability,
            });
            narrative.believability += edge.child.state.believability;
            node = &edge.child;
        }
        narrative
    }
}

fn most_visited(node: &TreeNode) -> Option<&TreeEdge> {
    let mut best: Option<&TreeEdge> = None;
    for edge in &node.edges {
        match best {
            Some(top) if edge.child.visits <= top.child.visits => {}
            _ => best = Some(edge),
        }
    }
    best
}

/// One select→expand→evaluate→backpropagate pass. Returns the reward that
/// was folded into every node on the visited path.
fn simulate(
    node: &mut TreeNode,
    config: &SearchConfig,
    rng: &mut StdRng,
) -> Result<f64, WorldError> {
    let reward = if let Some(index) = node.expand_child()? {
        let child = &mut node.edges[index].child;
        let reward = evaluate(&child.state, config, rng)?;
        child.record(reward);
        reward
    } else if let Some(index) = best_child_index(node, config.exploration) {
        simulate(&mut node.edges[index].child, config, rng)?
    } else {
        // Empty action space; the node is terminal and re-evaluates in place.
        evaluate(&node.state, config, rng)?
    };
    node.record(reward);
    Ok(reward)
}

/// Reward for a snapshot: its own believability, averaged with a
/// depth-bounded uniform-random playout when one is configured. Playout
/// states are transient and never attached to the tree.
fn evaluate(
    state: &StoryState,
    config: &SearchConfig,
    rng: &mut StdRng,
) -> Result<f64, WorldError> {
    if config.rollout_depth == 0 {
        return Ok(state.believability);
    }

    let mut total = state.believability;
    let mut count = 1usize;
    let mut current = state.clone();
    for _ in 0..config.rollout_depth {
        let actions = current.action_space();
        if actions.is_empty() {
            break;
        }
        let action = actions[rng.gen_range(0..actions.len())];
        current = current.apply(&action)?;
        total += current.believability;
        count += 1;
    }
    Ok(total / count as f64)
}
