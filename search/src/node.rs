//! Core search node type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::SearchError;
use crate::problem::Problem;

/// An immutable node in the search tree.
///
/// Each node owns a shared link to its parent, so a goal node keeps its
/// whole root path alive while siblings that nothing references are freed.
/// Nodes are never mutated after construction; expansion always creates a
/// fresh child.
///
/// Two nodes are equal iff their states are equal. Parent chain, action and
/// cost are deliberately excluded so set membership is by state identity.
pub struct Node<S, A> {
    state: S,
    parent: Option<Arc<Node<S, A>>>,
    action: Option<A>,
    path_cost: f64,
    depth: u32,
}

impl<S, A> Node<S, A> {
    /// Root node: no parent, no action, zero cost, depth 0.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        }
    }

    /// Build the child reached by applying `action` to `parent`'s state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NonFiniteCost`] if the problem reports a NaN or
    /// infinite path cost, and [`SearchError::NegativeStepCost`] if the new
    /// cost is below the parent's.
    pub fn child_node<P>(problem: &P, parent: &Arc<Self>, action: A) -> Result<Self, SearchError>
    where
        P: Problem<State = S, Action = A> + ?Sized,
    {
        let state = problem.result(&parent.state, &action);
        let path_cost = problem.path_cost(parent.path_cost, &parent.state, &action, &state);
        let depth = parent.depth + 1;

        if !path_cost.is_finite() {
            return Err(SearchError::NonFiniteCost {
                depth,
                cost: path_cost,
            });
        }
        if path_cost < parent.path_cost {
            return Err(SearchError::NegativeStepCost {
                depth,
                parent_cost: parent.path_cost,
                child_cost: path_cost,
            });
        }

        Ok(Self {
            state,
            parent: Some(Arc::clone(parent)),
            action: Some(action),
            path_cost,
            depth,
        })
    }

    /// The state this node reached.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated cost from the root.
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes from the root to `self`, inclusive.
    ///
    /// Walks parent links and materializes the result; calling it again
    /// yields the same sequence.
    #[must_use]
    pub fn path(&self) -> Vec<&Self> {
        let mut path = Vec::with_capacity(self.depth as usize + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            path.push(node);
            current = node.parent.as_deref();
        }
        path.reverse();
        path
    }

    /// Actions along [`Node::path`], excluding the root's absent action.
    #[must_use]
    pub fn solution_actions(&self) -> Vec<&A> {
        self.path()
            .into_iter()
            .filter_map(|n| n.action.as_ref())
            .collect()
    }

    /// States along [`Node::path`], root first.
    #[must_use]
    pub fn states(&self) -> Vec<&S> {
        self.path().into_iter().map(|n| &n.state).collect()
    }
}

impl<S: PartialEq, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for Node<S, A> {}

impl<S: Hash, A> Hash for Node<S, A> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

// Manual impl: a derived one would recurse through the whole parent chain.
impl<S: fmt::Debug, A: fmt::Debug> fmt::Debug for Node<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("path_cost", &self.path_cost)
            .field("depth", &self.depth)
            .field("parent", &self.parent.as_ref().map(|p| &p.state))
            .finish()
    }
}

// Unlink the parent chain iteratively so dropping a very deep solution
// cannot overflow the stack.
impl<S, A> Drop for Node<S, A> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => parent = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}
