//! Missionaries and cannibals: solution shape, validity of every state
//! on every returned path, and expansion counts per strategy.

use statespace_harness::worlds::river_crossing::{Bank, Load, RiverCrossing, RiverState};
use statespace_search::{graph_search, Problem, SearchPolicy, Strategy, Termination};

fn solve(strategy: Strategy) -> statespace_search::SearchOutcome<RiverState, Load> {
    graph_search(&RiverCrossing::classic(), strategy, &SearchPolicy::default()).unwrap()
}

fn s(m: u8, c: u8, boat: Bank) -> RiverState {
    RiverState::new(m, c, boat)
}

/// Every state safe, every step a legal crossing, endpoints correct.
fn assert_valid_path(world: &RiverCrossing, states: &[RiverState], actions: &[Load]) {
    assert_eq!(states.len(), actions.len() + 1);
    assert_eq!(states[0], world.initial_state());
    assert!(world.goal_test(&states[states.len() - 1]));
    for (i, action) in actions.iter().enumerate() {
        assert!(world.is_safe(&states[i]), "unsafe state {}", states[i]);
        assert!(
            world.actions(&states[i]).contains(action),
            "{action} not legal from {}",
            states[i]
        );
        assert_eq!(world.result(&states[i], action), states[i + 1]);
        assert_ne!(states[i].boat, states[i + 1].boat);
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: breadth-first finds the 11-crossing solution
// ---------------------------------------------------------------------------

#[test]
fn bfs_returns_eleven_crossings() {
    use Bank::{Left as L, Right as R};

    let outcome = solve(Strategy::BreadthFirst);
    assert_eq!(outcome.termination, Termination::GoalReached);
    let states = outcome.path_states().unwrap();
    let actions = outcome.path_actions().unwrap();
    assert_eq!(actions.len(), 11);
    assert!((outcome.cost().unwrap() - 11.0).abs() < f64::EPSILON);
    assert_eq!(
        states,
        vec![
            s(3, 3, L),
            s(3, 1, R),
            s(3, 2, L),
            s(3, 0, R),
            s(3, 1, L),
            s(1, 1, R),
            s(2, 2, L),
            s(0, 2, R),
            s(0, 3, L),
            s(0, 1, R),
            s(1, 1, L),
            s(0, 0, R),
        ]
    );
    assert_valid_path(&RiverCrossing::classic(), &states, &actions);
}

#[test]
fn dfs_path_is_valid_at_every_step() {
    let outcome = solve(Strategy::DepthFirst);
    assert!(outcome.is_goal_reached());
    let states = outcome.path_states().unwrap();
    let actions = outcome.path_actions().unwrap();
    assert_valid_path(&RiverCrossing::classic(), &states, &actions);
    assert_eq!(states[1], s(2, 2, Bank::Right));
}

#[test]
fn ucs_and_astar_are_optimal() {
    for strategy in [Strategy::UniformCost, Strategy::AStar] {
        let outcome = solve(strategy);
        let states = outcome.path_states().unwrap();
        let actions = outcome.path_actions().unwrap();
        assert_eq!(actions.len(), 11, "{strategy}");
        assert_valid_path(&RiverCrossing::classic(), &states, &actions);
    }
}

#[test]
fn expansion_counts_per_strategy() {
    let counts: Vec<u64> = Strategy::ALL
        .iter()
        .map(|&strategy| solve(strategy).stats.expansions)
        .collect();
    assert_eq!(counts, [14, 11, 14, 13]);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: generalized populations
// ---------------------------------------------------------------------------

#[test]
fn larger_boat_solves_five_and_five() {
    // With a three-seat boat, five and five is solvable.
    let world = RiverCrossing::with_capacity(5, 5, 3).unwrap();
    let outcome = graph_search(&world, Strategy::BreadthFirst, &SearchPolicy::default()).unwrap();
    assert!(outcome.is_goal_reached());
    assert_valid_path(
        &world,
        &outcome.path_states().unwrap(),
        &outcome.path_actions().unwrap(),
    );
}

#[test]
fn two_seat_boat_cannot_move_four_and_four() {
    let world = RiverCrossing::with_capacity(4, 4, 2).unwrap();
    let outcome = graph_search(&world, Strategy::BreadthFirst, &SearchPolicy::default()).unwrap();
    assert_eq!(outcome.termination, Termination::FrontierExhausted);
    assert!(outcome.solution.is_none());
}

#[test]
fn depth_limit_below_eleven_cuts_off() {
    let world = RiverCrossing::classic();
    let shallow = SearchPolicy::default().with_max_depth(10);
    let outcome = graph_search(&world, Strategy::BreadthFirst, &shallow).unwrap();
    assert_eq!(outcome.termination, Termination::DepthCutoff);
    assert!(outcome.stats.depth_cutoffs > 0);

    let enough = SearchPolicy::default().with_max_depth(11);
    let outcome = graph_search(&world, Strategy::BreadthFirst, &enough).unwrap();
    assert_eq!(outcome.path_actions().unwrap().len(), 11);
}
