//! Harness runner: drives engine searches over a world.
//!
//! The runner uses ONLY engine entry points (`graph_search`). It does not
//! order frontiers, test goals or compute costs itself.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → graph_search(world, strategy) × {bfs, dfs, ucs, astar}
//!   → StrategyRun { strategy, outcome } → report::build_report()
//! ```

use std::panic;
use std::thread;

use statespace_search::{graph_search, SearchError, SearchOutcome, SearchPolicy, Strategy};

use crate::contract::World;

/// One strategy's outcome on one world.
#[derive(Debug)]
pub struct StrategyRun<S, A> {
    pub strategy: Strategy,
    pub outcome: SearchOutcome<S, A>,
}

impl<S: Clone, A: Clone> StrategyRun<S, A> {
    /// Number of actions on the solution path, if one was found.
    #[must_use]
    pub fn solution_len(&self) -> Option<usize> {
        self.outcome.solution().map(|n| n.depth() as usize)
    }
}

/// Run a single strategy.
///
/// # Errors
///
/// Any [`SearchError`] from the engine.
pub fn run_strategy<W>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<StrategyRun<W::State, W::Action>, SearchError>
where
    W: World + ?Sized,
{
    let outcome = graph_search(world, strategy, policy)?;
    log::debug!(
        "{}/{strategy}: {} after {} expansions, cost {:?}",
        world.world_id(),
        outcome.termination,
        outcome.stats.expansions,
        outcome.cost(),
    );
    Ok(StrategyRun { strategy, outcome })
}

/// Run every strategy in [`Strategy::ALL`] order, one after another.
///
/// # Errors
///
/// The first [`SearchError`] encountered; later strategies are not run.
pub fn run_all<W>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<Vec<StrategyRun<W::State, W::Action>>, SearchError>
where
    W: World + ?Sized,
{
    Strategy::ALL
        .iter()
        .map(|&strategy| run_strategy(world, strategy, policy))
        .collect()
}

/// Run every strategy concurrently on scoped threads.
///
/// Each search owns its frontier and explored set; the world is only read.
/// Results come back in [`Strategy::ALL`] order regardless of which thread
/// finishes first, so the output matches [`run_all`].
///
/// # Errors
///
/// The [`SearchError`] of the earliest strategy (in `ALL` order) that
/// failed. A panicking search thread is re-raised on the caller.
pub fn run_all_parallel<W>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<Vec<StrategyRun<W::State, W::Action>>, SearchError>
where
    W: World + Sync + ?Sized,
    W::State: Send + Sync,
    W::Action: Send + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = Strategy::ALL
            .iter()
            .map(|&strategy| scope.spawn(move || run_strategy(world, strategy, policy)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}
