//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::node::Node;
use crate::problem::Problem;

/// The four interchangeable expansion orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// FIFO frontier. Shallowest goal first; optimal for unit step costs.
    BreadthFirst,
    /// LIFO frontier. No optimality guarantee.
    DepthFirst,
    /// Priority by accumulated path cost `g`.
    UniformCost,
    /// Priority by `g + h`.
    AStar,
}

impl Strategy {
    /// All strategies, in reporting order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Stable lowercase label used in reports and fixture output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// The frontier priority of `node` under this strategy.
    ///
    /// Breadth-first and depth-first return 0 (their frontiers ignore it).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidHeuristic`] if A* is selected and the
    /// heuristic is NaN, infinite or negative.
    pub fn priority<P: Problem + ?Sized>(
        self,
        problem: &P,
        node: &Node<P::State, P::Action>,
    ) -> Result<f64, SearchError> {
        match self {
            Self::BreadthFirst | Self::DepthFirst => Ok(0.0),
            Self::UniformCost => Ok(node.path_cost()),
            Self::AStar => {
                let h = problem.heuristic(node.state());
                if !h.is_finite() || h < 0.0 {
                    return Err(SearchError::InvalidHeuristic { value: h });
                }
                Ok(node.path_cost() + h)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Self::UniformCost),
            "astar" | "a*" => Ok(Self::AStar),
            other => Err(SearchError::InvalidPolicy {
                detail: format!("unknown strategy {other:?}"),
            }),
        }
    }
}
