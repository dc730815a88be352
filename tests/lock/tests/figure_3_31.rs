//! Figure 3.31 polygon field: exact routes and costs per strategy.

use statespace_harness::contract::World;
use statespace_harness::worlds::figure_3_31;
use statespace_harness::worlds::geometry::Point;
use statespace_search::{graph_search, SearchPolicy, Strategy, Termination};

struct Expected {
    strategy: Strategy,
    path: &'static [&'static str],
    cost: f64,
    expansions: u64,
}

const EXPECTED: [Expected; 4] = [
    Expected {
        strategy: Strategy::BreadthFirst,
        path: &["S", "rec1", "rec4", "hex1", "hex6", "G"],
        cost: 13.593_625,
        expansions: 33,
    },
    Expected {
        strategy: Strategy::DepthFirst,
        path: &["S", "pent3", "pent4", "quad3", "quad_2_3", "G"],
        cost: 12.686_259,
        expansions: 5,
    },
    Expected {
        strategy: Strategy::UniformCost,
        path: &["S", "rec2", "pent1", "tri2", "quad2", "quad3", "quad_2_3", "G"],
        cost: 11.144_199,
        expansions: 33,
    },
    Expected {
        strategy: Strategy::AStar,
        path: &["S", "rec2", "pent1", "tri2", "quad2", "quad3", "quad_2_3", "G"],
        cost: 11.144_199,
        expansions: 17,
    },
];

// ---------------------------------------------------------------------------
// ACCEPTANCE: per-strategy routes on the Figure 3.31 field
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_matches_its_locked_route() {
    let problem = figure_3_31::problem().unwrap();
    for expected in &EXPECTED {
        let outcome = graph_search(&problem, expected.strategy, &SearchPolicy::default()).unwrap();
        assert_eq!(outcome.termination, Termination::GoalReached);

        let path = problem.names(&outcome.path_states().unwrap());
        assert_eq!(path, expected.path, "{}", expected.strategy);

        let cost = outcome.cost().unwrap();
        assert!(
            (cost - expected.cost).abs() < 1e-6,
            "{}: cost {cost}",
            expected.strategy
        );
        assert_eq!(
            outcome.stats.expansions, expected.expansions,
            "{}",
            expected.strategy
        );
    }
}

#[test]
fn astar_expands_fewer_than_ucs() {
    let problem = figure_3_31::problem().unwrap();
    let policy = SearchPolicy::default();
    let ucs = graph_search(&problem, Strategy::UniformCost, &policy).unwrap();
    let astar = graph_search(&problem, Strategy::AStar, &policy).unwrap();
    assert!(astar.stats.expansions < ucs.stats.expansions);
}

#[test]
fn reported_cost_is_the_sum_of_hop_lengths() {
    let problem = figure_3_31::problem().unwrap();
    let outcome = graph_search(&problem, Strategy::UniformCost, &SearchPolicy::default()).unwrap();
    let graph = problem.graph();
    let points: Vec<Point> = outcome
        .path_states()
        .unwrap()
        .into_iter()
        .map(|id| graph.location(id).unwrap())
        .collect();
    let total: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    assert!((total - outcome.cost().unwrap()).abs() < 1e-12);
}

#[test]
fn solution_hops_are_declared_edges() {
    let problem = figure_3_31::problem().unwrap();
    let graph = problem.graph();
    for strategy in Strategy::ALL {
        let outcome = graph_search(&problem, strategy, &SearchPolicy::default()).unwrap();
        let states = outcome.path_states().unwrap();
        for hop in states.windows(2) {
            assert!(
                graph.is_connected(hop[0], hop[1]),
                "{strategy}: {} -> {} is not an edge",
                problem.describe_state(&hop[0]),
                problem.describe_state(&hop[1])
            );
        }
    }
}
