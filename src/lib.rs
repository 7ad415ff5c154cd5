//! Story Engine — believable story generation via Monte Carlo tree search.
//!
//! Explores the combinatorial space of discrete character actions (move,
//! steal, play, kill) with UCT-guided tree search, scoring candidate
//! action sequences by a deterministic, rule-based believability heuristic.

pub mod core;
pub mod schema;
