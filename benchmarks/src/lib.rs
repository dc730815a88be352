//! Shared helpers for statespace benchmark suites.
//!
//! A [`Regime`] pairs a world with a policy that stresses one part of the
//! engine: deep optimal paths, weighted geometry, exhaustive dead ends,
//! frontier pressure and budget cutoffs.

use statespace_harness::contract::World;
use statespace_harness::report::{report_all, SearchReport};
use statespace_harness::worlds::figure_3_31;
use statespace_harness::worlds::river_crossing::RiverCrossing;
use statespace_harness::worlds::visibility::PolygonPathProblem;
use statespace_search::{graph_search, Problem, SearchPolicy, SearchStats, Strategy, Termination};

/// Step on an [`OpenGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    North,
    East,
    South,
    West,
}

/// Obstacle-free `width` x `height` grid, corner to corner.
///
/// Every cell is reachable, so uninformed strategies visit most of the grid
/// before the goal and the frontier grows with the grid's diagonal.
#[derive(Debug, Clone)]
pub struct OpenGrid {
    pub width: u32,
    pub height: u32,
}

impl Problem for OpenGrid {
    type State = (u32, u32);
    type Action = Step;

    fn initial_state(&self) -> (u32, u32) {
        (0, 0)
    }

    fn actions(&self, &(x, y): &(u32, u32)) -> Vec<Step> {
        let mut steps = Vec::with_capacity(4);
        if y + 1 < self.height {
            steps.push(Step::North);
        }
        if x + 1 < self.width {
            steps.push(Step::East);
        }
        if y > 0 {
            steps.push(Step::South);
        }
        if x > 0 {
            steps.push(Step::West);
        }
        steps
    }

    fn result(&self, &(x, y): &(u32, u32), step: &Step) -> (u32, u32) {
        match step {
            Step::North => (x, y + 1),
            Step::East => (x + 1, y),
            Step::South => (x, y.saturating_sub(1)),
            Step::West => (x.saturating_sub(1), y),
        }
    }

    fn goal_test(&self, state: &(u32, u32)) -> bool {
        *state == (self.width - 1, self.height - 1)
    }

    fn heuristic(&self, &(x, y): &(u32, u32)) -> f64 {
        f64::from(self.width - 1 - x) + f64::from(self.height - 1 - y)
    }
}

impl World for OpenGrid {
    fn world_id(&self) -> &str {
        "open_grid"
    }

    fn describe_state(&self, (x, y): &(u32, u32)) -> String {
        format!("({x}, {y})")
    }

    fn describe_action(&self, step: &Step) -> String {
        format!("{step:?}")
    }
}

/// The worlds a regime can run.
pub enum RegimeWorld {
    River(RiverCrossing),
    Polygon(PolygonPathProblem),
    Grid(OpenGrid),
}

/// A named world + policy combination.
pub struct Regime {
    pub name: &'static str,
    pub world: RegimeWorld,
    pub policy: SearchPolicy,
}

/// Summary of one engine run, enough to sanity-check a benchmark.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub termination: Termination,
    pub stats: SearchStats,
}

/// Classic 3/3 river crossing: eleven-step optimal solution.
#[must_use]
pub fn regime_river_classic() -> Regime {
    Regime {
        name: "river_classic",
        world: RegimeWorld::River(RiverCrossing::classic()),
        policy: SearchPolicy::default(),
    }
}

/// Figure 3.31 polygon field: weighted costs with a Euclidean heuristic.
///
/// # Panics
///
/// Panics if the bundled figure fails to build. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn regime_polygon_field() -> Regime {
    Regime {
        name: "polygon_field",
        world: RegimeWorld::Polygon(figure_3_31::problem().expect("figure 3.31 builds")),
        policy: SearchPolicy::default(),
    }
}

/// Four and four with a two-seat boat: every strategy exhausts the space.
///
/// # Panics
///
/// Panics if the world rejects its parameters.
#[must_use]
pub fn regime_exhaustive_dead_end() -> Regime {
    Regime {
        name: "exhaustive_dead_end",
        world: RegimeWorld::River(RiverCrossing::with_capacity(4, 4, 2).expect("valid river")),
        policy: SearchPolicy::default(),
    }
}

/// 60 x 60 open grid.
#[must_use]
pub fn regime_frontier_pressure() -> Regime {
    Regime {
        name: "frontier_pressure",
        world: RegimeWorld::Grid(OpenGrid {
            width: 60,
            height: 60,
        }),
        policy: SearchPolicy::default(),
    }
}

/// 200 x 200 open grid stopped after 500 expansions.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    Regime {
        name: "budget_limited",
        world: RegimeWorld::Grid(OpenGrid {
            width: 200,
            height: 200,
        }),
        policy: SearchPolicy::default().with_max_expansions(500),
    }
}

/// Every regime, in reporting order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_river_classic(),
        regime_polygon_field(),
        regime_exhaustive_dead_end(),
        regime_frontier_pressure(),
        regime_budget_limited(),
    ]
}

fn summarize<P>(problem: &P, strategy: Strategy, policy: &SearchPolicy) -> RunSummary
where
    P: Problem + ?Sized,
{
    let outcome = graph_search(problem, strategy, policy).expect("search");
    RunSummary {
        termination: outcome.termination,
        stats: outcome.stats,
    }
}

/// Run one engine search only (no report building).
///
/// # Panics
///
/// Panics if the engine returns an error.
#[must_use]
pub fn run_engine(regime: &Regime, strategy: Strategy) -> RunSummary {
    match &regime.world {
        RegimeWorld::River(w) => summarize(w, strategy, &regime.policy),
        RegimeWorld::Polygon(w) => summarize(w, strategy, &regime.policy),
        RegimeWorld::Grid(w) => summarize(w, strategy, &regime.policy),
    }
}

/// Run every strategy and build canonical reports end-to-end.
///
/// # Panics
///
/// Panics if any search fails.
#[must_use]
pub fn run_reports(regime: &Regime) -> Vec<SearchReport> {
    match &regime.world {
        RegimeWorld::River(w) => report_all(w, &regime.policy),
        RegimeWorld::Polygon(w) => report_all(w, &regime.policy),
        RegimeWorld::Grid(w) => report_all(w, &regime.policy),
    }
    .expect("report_all")
}

/// Serialized size of a regime's reports, for throughput annotations.
#[must_use]
pub fn report_bytes(reports: &[SearchReport]) -> usize {
    reports.iter().map(|r| r.bytes.len()).sum()
}
