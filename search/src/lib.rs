//! Statespace Search: generic graph search over problem-defined state spaces.
//!
//! This crate is the engine. It knows nothing about any concrete puzzle;
//! worlds live in `statespace_harness` and implement [`Problem`].
//!
//! # Crate dependency graph
//!
//! ```text
//! statespace_search  ←  statespace_harness
//! (nodes, frontiers)    (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`Node`] — immutable search-tree node with a shared parent link
//! - [`Problem`] — trait every concrete puzzle implements
//! - [`Frontier`] — expansion order (FIFO, LIFO, priority)
//! - [`Strategy`] — breadth-first, depth-first, uniform-cost, A*
//! - [`SearchPolicy`] — expansion/depth budgets and transition recording
//! - [`SearchOutcome`] — solution node (if any), termination reason, stats

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod problem;
pub mod search;
pub mod strategy;
pub mod trace;

pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use node::Node;
pub use policy::SearchPolicy;
pub use problem::Problem;
pub use search::{
    astar_search, breadth_first_graph_search, depth_first_graph_search, graph_search,
    uniform_cost_search, SearchOutcome,
};
pub use strategy::Strategy;
pub use trace::{SearchStats, Termination, Transition, TransitionGraph, TransitionOutcome};
