//! Search problem contract trait.

use std::hash::Hash;

/// Trait for state spaces that support graph search.
///
/// A concrete puzzle supplies an initial state, a goal test, successor
/// generation and step costs. The engine never inspects `State` or `Action`
/// beyond equality and hashing.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. Breadth-first and depth-first tie-breaks depend on this order.
/// - `result` must be pure: same `(state, action)` → equal states.
/// - `path_cost(c, ..)` must return a value `>= c` (no negative steps).
///   Violations are reported as [`crate::SearchError::NegativeStepCost`].
/// - `heuristic` must be admissible (never overestimate the remaining cost)
///   for A* to return a minimal-cost path, and consistent for the first goal
///   popped to be optimal. An inadmissible heuristic is a caller error: A*
///   still terminates but the returned path may cost more than the optimum.
///
/// Implementations that are free of interior mutability are `Sync`, and may
/// be searched from several threads at once; every search run owns its own
/// frontier and explored set.
pub trait Problem {
    /// Problem-defined state. Used as a set/map key.
    type State: Clone + Eq + Hash;
    /// Problem-defined transition descriptor. Carried on nodes for reporting.
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Enumerate the actions applicable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` is an accepted goal.
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of the path through `to`, given cost `accumulated` up to `from`.
    ///
    /// Defaults to one unit per step.
    fn path_cost(
        &self,
        accumulated: f64,
        _from: &Self::State,
        _action: &Self::Action,
        _to: &Self::State,
    ) -> f64 {
        accumulated + 1.0
    }

    /// Lower-bound estimate of the remaining cost from `state` to a goal.
    ///
    /// Only consulted by A*. Defaults to zero, which makes A* behave like
    /// uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}
