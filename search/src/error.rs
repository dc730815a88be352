//! Typed search errors.
//!
//! `SearchError` covers pre-flight policy failures and problem contract
//! violations that would otherwise yield a wrong-but-plausible path.
//! "No path exists" is not an error: it is an `Ok(SearchOutcome)` whose
//! [`crate::trace::Termination`] says why the search stopped.

use thiserror::Error;

/// Typed failure for a search run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The policy selected an option that cannot be honoured.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// `Problem::path_cost` returned less than the accumulated cost, which
    /// implies a negative step. Uniform-cost and A* ordering depend on
    /// non-negative steps.
    #[error(
        "negative step cost at depth {depth}: path cost went from {parent_cost} to {child_cost}"
    )]
    NegativeStepCost {
        depth: u32,
        parent_cost: f64,
        child_cost: f64,
    },

    /// `Problem::path_cost` returned NaN or an infinity.
    #[error("non-finite path cost {cost} at depth {depth}")]
    NonFiniteCost { depth: u32, cost: f64 },

    /// `Problem::heuristic` returned NaN, an infinity, or a negative estimate.
    #[error("heuristic must be finite and non-negative, got {value}")]
    InvalidHeuristic { value: f64 },
}
