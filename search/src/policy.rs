//! Search policy: budgets and recording options.

use crate::error::SearchError;

/// Budget and recording configuration for one search run.
///
/// The default policy is unbounded and records nothing beyond statistics;
/// termination then relies on the state space being finite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` = unbounded.
    pub max_expansions: Option<u64>,
    /// Children deeper than this are not generated. `None` = unbounded.
    pub max_depth: Option<u32>,
    /// Record every generated transition into a [`crate::TransitionGraph`].
    pub record_transitions: bool,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_transitions(mut self) -> Self {
        self.record_transitions = true;
        self
    }

    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the expansion budget is
    /// zero, which would stop every search before its root is expanded.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}
