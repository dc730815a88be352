//! Termination reasons, run statistics and the optional transition log.
//!
//! The transition log is a derived record for collaborators that want to
//! draw the explored graph. The engine never reads it back.

use std::fmt;

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A node satisfying the goal test was popped.
    GoalReached,
    /// The frontier emptied with no depth cutoff: no path exists from the
    /// initial state.
    FrontierExhausted,
    /// The frontier emptied but some children were skipped by the depth
    /// limit, so a deeper path may exist.
    DepthCutoff,
    /// The expansion budget ran out before a goal was popped.
    ExpansionBudgetExceeded,
}

impl Termination {
    /// Stable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthCutoff => "depth_cutoff",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }

    /// True if the run stopped because of a policy budget rather than
    /// reaching a conclusion about the state space.
    #[must_use]
    pub fn is_budget_limited(self) -> bool {
        matches!(self, Self::DepthCutoff | Self::ExpansionBudgetExceeded)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes popped and expanded (passed to `Problem::actions`).
    pub expansions: u64,
    /// Child nodes generated.
    pub generated: u64,
    /// Children dropped because their state was explored or already queued.
    pub duplicates_suppressed: u64,
    /// Children skipped by the depth limit.
    pub depth_cutoffs: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// What happened to a generated child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Inserted into the frontier.
    Queued,
    /// Its state was already expanded.
    AlreadyExplored,
    /// Its state was already queued at an equal or better priority.
    AlreadyQueued,
    /// Skipped by the depth limit.
    DepthCutoff,
}

impl TransitionOutcome {
    /// Stable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::AlreadyExplored => "already_explored",
            Self::AlreadyQueued => "already_queued",
            Self::DepthCutoff => "depth_cutoff",
        }
    }
}

/// One generated edge `from --action--> to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A> {
    pub from: S,
    pub action: A,
    pub to: S,
    /// Accumulated path cost at `to` along this edge.
    pub path_cost: f64,
    pub outcome: TransitionOutcome,
}

/// Ordered record of expansions and generated transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionGraph<S, A> {
    /// Expanded states in expansion order.
    pub expanded: Vec<S>,
    /// Generated transitions in generation order.
    pub transitions: Vec<Transition<S, A>>,
}

impl<S, A> TransitionGraph<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: Vec::new(),
            transitions: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions that put a node on the frontier.
    pub fn queued(&self) -> impl Iterator<Item = &Transition<S, A>> {
        self.transitions
            .iter()
            .filter(|t| t.outcome == TransitionOutcome::Queued)
    }
}

impl<S, A> Default for TransitionGraph<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
