//! Search entry points and the shared expansion loop.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::node::Node;
use crate::policy::SearchPolicy;
use crate::problem::Problem;
use crate::strategy::Strategy;
use crate::trace::{SearchStats, Termination, Transition, TransitionGraph, TransitionOutcome};

/// Result of a search run.
///
/// A run that finds no path is still `Ok`: check
/// [`SearchOutcome::is_goal_reached`] or inspect `termination`.
#[derive(Debug)]
pub struct SearchOutcome<S, A> {
    /// The goal node (if found). Its parent chain is the solution path.
    pub solution: Option<Arc<Node<S, A>>>,
    /// Why the run stopped.
    pub termination: Termination,
    /// Aggregate counters.
    pub stats: SearchStats,
    /// Expansion and transition log, if the policy asked for one.
    pub transitions: Option<TransitionGraph<S, A>>,
}

impl<S: Clone, A: Clone> SearchOutcome<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// The goal node, if one was reached. Walk its parents for the path.
    #[must_use]
    pub fn solution(&self) -> Option<&Node<S, A>> {
        self.solution.as_deref()
    }

    /// Total path cost of the solution.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.solution().map(Node::path_cost)
    }

    /// Solution states, initial state first.
    #[must_use]
    pub fn path_states(&self) -> Option<Vec<S>> {
        self.solution()
            .map(|n| n.states().into_iter().cloned().collect())
    }

    /// Solution actions in application order.
    #[must_use]
    pub fn path_actions(&self) -> Option<Vec<A>> {
        self.solution()
            .map(|n| n.solution_actions().into_iter().cloned().collect())
    }
}

/// Run graph search with the given strategy and policy.
///
/// The goal test is applied when a node is popped, never when it is
/// generated, so uniform-cost and A* return a minimal-cost path for
/// non-negative step costs (A* additionally needs an admissible,
/// consistent heuristic).
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if the policy fails validation.
/// - [`SearchError::NegativeStepCost`] / [`SearchError::NonFiniteCost`] if the
///   problem reports an invalid path cost.
/// - [`SearchError::InvalidHeuristic`] if A* gets an unusable estimate.
pub fn graph_search<P>(
    problem: &P,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    policy.validate()?;
    match strategy {
        Strategy::BreadthFirst => run(problem, strategy, policy, FifoFrontier::new()),
        Strategy::DepthFirst => run(problem, strategy, policy, LifoFrontier::new()),
        Strategy::UniformCost | Strategy::AStar => {
            run(problem, strategy, policy, PriorityFrontier::new())
        }
    }
}

/// Breadth-first graph search with an unbounded policy.
///
/// # Errors
///
/// See [`graph_search`].
pub fn breadth_first_graph_search<P: Problem + ?Sized>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    graph_search(problem, Strategy::BreadthFirst, &SearchPolicy::default())
}

/// Depth-first graph search with an unbounded policy.
///
/// # Errors
///
/// See [`graph_search`].
pub fn depth_first_graph_search<P: Problem + ?Sized>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    graph_search(problem, Strategy::DepthFirst, &SearchPolicy::default())
}

/// Uniform-cost search with an unbounded policy.
///
/// # Errors
///
/// See [`graph_search`].
pub fn uniform_cost_search<P: Problem + ?Sized>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    graph_search(problem, Strategy::UniformCost, &SearchPolicy::default())
}

/// A* search with an unbounded policy, using [`Problem::heuristic`].
///
/// # Errors
///
/// See [`graph_search`].
pub fn astar_search<P: Problem + ?Sized>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    graph_search(problem, Strategy::AStar, &SearchPolicy::default())
}

fn run<P, F>(
    problem: &P,
    strategy: Strategy,
    policy: &SearchPolicy,
    mut frontier: F,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
    F: Frontier<P::State, P::Action>,
{
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut cut_off: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();
    let mut transitions = policy.record_transitions.then(TransitionGraph::new);
    let mut solution = None;

    let root = Arc::new(Node::root(problem.initial_state()));
    let root_priority = strategy.priority(problem, &root)?;
    frontier.insert(root, root_priority);

    log::debug!(
        "{strategy}: search started (max_expansions={:?}, max_depth={:?})",
        policy.max_expansions,
        policy.max_depth
    );

    let termination = loop {
        let Some(node) = frontier.remove_next() else {
            // A cut-off state that was later explored within the limit hid nothing.
            break if cut_off.iter().any(|state| !explored.contains(state)) {
                Termination::DepthCutoff
            } else {
                Termination::FrontierExhausted
            };
        };

        if problem.goal_test(node.state()) {
            solution = Some(node);
            break Termination::GoalReached;
        }
        if explored.contains(node.state()) {
            continue;
        }
        if policy
            .max_expansions
            .is_some_and(|max| stats.expansions >= max)
        {
            break Termination::ExpansionBudgetExceeded;
        }

        explored.insert(node.state().clone());
        stats.expansions += 1;
        if let Some(graph) = transitions.as_mut() {
            graph.expanded.push(node.state().clone());
        }
        log::trace!(
            "{strategy}: expansion {} at depth {} (g={}, frontier={})",
            stats.expansions,
            node.depth(),
            node.path_cost(),
            frontier.len()
        );

        for action in problem.actions(node.state()) {
            let child = Node::child_node(problem, &node, action)?;
            stats.generated += 1;

            let record = transitions.is_some().then(|| {
                (
                    child.state().clone(),
                    child.action().cloned(),
                    child.path_cost(),
                )
            });

            let outcome = if explored.contains(child.state()) {
                TransitionOutcome::AlreadyExplored
            } else if policy.max_depth.is_some_and(|max| child.depth() > max) {
                if frontier.contains(child.state()) {
                    TransitionOutcome::AlreadyQueued
                } else {
                    cut_off.insert(child.state().clone());
                    TransitionOutcome::DepthCutoff
                }
            } else {
                let priority = strategy.priority(problem, &child)?;
                if frontier.insert(Arc::new(child), priority) {
                    TransitionOutcome::Queued
                } else {
                    TransitionOutcome::AlreadyQueued
                }
            };

            match outcome {
                TransitionOutcome::AlreadyExplored | TransitionOutcome::AlreadyQueued => {
                    stats.duplicates_suppressed += 1;
                }
                TransitionOutcome::DepthCutoff => stats.depth_cutoffs += 1,
                TransitionOutcome::Queued => {}
            }

            if let (Some(graph), Some((to, Some(action), path_cost))) =
                (transitions.as_mut(), record)
            {
                graph.transitions.push(Transition {
                    from: node.state().clone(),
                    action,
                    to,
                    path_cost,
                    outcome,
                });
            }
        }
    };

    stats.frontier_high_water = frontier.high_water();

    if termination.is_budget_limited() {
        log::warn!(
            "{strategy}: stopped by policy ({termination}) after {} expansions",
            stats.expansions
        );
    }
    log::debug!(
        "{strategy}: {termination} (expansions={}, generated={}, duplicates={}, frontier_high_water={}, stale_discarded={})",
        stats.expansions,
        stats.generated,
        stats.duplicates_suppressed,
        stats.frontier_high_water,
        frontier.stale_discarded()
    );

    Ok(SearchOutcome {
        solution,
        termination,
        stats,
        transitions,
    })
}
