//! Engine acceptance scenarios on small hand-built graphs: trivial
//! instances, failure correctness, typed errors and policy limits.

use statespace_search::{
    astar_search, breadth_first_graph_search, depth_first_graph_search, graph_search,
    uniform_cost_search, Problem, SearchError, SearchOutcome, SearchPolicy, Strategy, Termination,
};

/// Directed weighted graph over named vertices. Action = target vertex.
struct Weighted {
    start: &'static str,
    goal: &'static str,
    edges: &'static [(&'static str, &'static str, f64)],
    heuristic: &'static [(&'static str, f64)],
}

impl Weighted {
    fn new(
        start: &'static str,
        goal: &'static str,
        edges: &'static [(&'static str, &'static str, f64)],
    ) -> Self {
        Self {
            start,
            goal,
            edges,
            heuristic: &[],
        }
    }
}

impl Problem for Weighted {
    type State = &'static str;
    type Action = &'static str;

    fn initial_state(&self) -> &'static str {
        self.start
    }

    fn actions(&self, state: &&'static str) -> Vec<&'static str> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, _)| to)
            .collect()
    }

    fn result(&self, _state: &&'static str, action: &&'static str) -> &'static str {
        action
    }

    fn goal_test(&self, state: &&'static str) -> bool {
        *state == self.goal
    }

    fn path_cost(
        &self,
        accumulated: f64,
        from: &&'static str,
        _action: &&'static str,
        to: &&'static str,
    ) -> f64 {
        self.edges
            .iter()
            .find(|(a, b, _)| a == from && b == to)
            .map_or(f64::NAN, |&(_, _, w)| accumulated + w)
    }

    fn heuristic(&self, state: &&'static str) -> f64 {
        self.heuristic
            .iter()
            .find(|(s, _)| s == state)
            .map_or(0.0, |&(_, h)| h)
    }
}

fn all_strategies(problem: &Weighted) -> Vec<SearchOutcome<&'static str, &'static str>> {
    vec![
        breadth_first_graph_search(problem).unwrap(),
        depth_first_graph_search(problem).unwrap(),
        uniform_cost_search(problem).unwrap(),
        astar_search(problem).unwrap(),
    ]
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: trivial instances
// ---------------------------------------------------------------------------

#[test]
fn two_vertices_one_edge_cost_five() {
    let problem = Weighted::new("S", "G", &[("S", "G", 5.0)]);
    for outcome in all_strategies(&problem) {
        assert_eq!(outcome.path_states().unwrap(), ["S", "G"]);
        assert_eq!(outcome.path_actions().unwrap(), ["G"]);
        assert!((outcome.cost().unwrap() - 5.0).abs() < f64::EPSILON);
    }
}

#[test]
fn initial_state_that_is_a_goal_returns_the_root() {
    let problem = Weighted::new("S", "S", &[("S", "A", 1.0)]);
    for outcome in all_strategies(&problem) {
        let root = outcome.solution().unwrap();
        assert_eq!(root.depth(), 0);
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
        assert_eq!(outcome.stats.expansions, 0);
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: failure correctness
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goal_exhausts_the_frontier() {
    // G lives in a component S cannot reach.
    let problem = Weighted::new(
        "S",
        "G",
        &[("S", "A", 1.0), ("A", "S", 1.0), ("A", "B", 1.0), ("G", "S", 1.0)],
    );
    for outcome in all_strategies(&problem) {
        assert_eq!(outcome.termination, Termination::FrontierExhausted);
        assert!(outcome.solution.is_none());
        assert!(outcome.path_states().is_none());
        assert_eq!(outcome.stats.expansions, 3);
    }
}

#[test]
fn ucs_prefers_cheaper_longer_route() {
    let problem = Weighted::new(
        "S",
        "G",
        &[("S", "G", 10.0), ("S", "A", 1.0), ("A", "B", 1.0), ("B", "G", 1.0)],
    );
    let bfs = breadth_first_graph_search(&problem).unwrap();
    assert_eq!(bfs.path_states().unwrap(), ["S", "G"]);
    let ucs = uniform_cost_search(&problem).unwrap();
    assert_eq!(ucs.path_states().unwrap(), ["S", "A", "B", "G"]);
    assert!((ucs.cost().unwrap() - 3.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: typed errors
// ---------------------------------------------------------------------------

#[test]
fn negative_step_cost_is_rejected() {
    let problem = Weighted::new("S", "G", &[("S", "A", 2.0), ("A", "G", -1.0)]);
    for strategy in Strategy::ALL {
        let err = graph_search(&problem, strategy, &SearchPolicy::default()).unwrap_err();
        assert!(
            matches!(err, SearchError::NegativeStepCost { depth: 2, .. }),
            "{strategy}: {err}"
        );
    }
}

#[test]
fn missing_edge_weight_is_a_non_finite_cost() {
    struct Broken;
    impl Problem for Broken {
        type State = u8;
        type Action = u8;
        fn initial_state(&self) -> u8 {
            0
        }
        fn actions(&self, _state: &u8) -> Vec<u8> {
            vec![1]
        }
        fn result(&self, _state: &u8, action: &u8) -> u8 {
            *action
        }
        fn goal_test(&self, state: &u8) -> bool {
            *state == 1
        }
        fn path_cost(&self, _acc: f64, _from: &u8, _action: &u8, _to: &u8) -> f64 {
            f64::INFINITY
        }
    }
    let err = uniform_cost_search(&Broken).unwrap_err();
    assert!(matches!(err, SearchError::NonFiniteCost { depth: 1, .. }), "{err}");
}

#[test]
fn negative_heuristic_is_rejected_by_astar_only() {
    let problem = Weighted {
        heuristic: &[("S", -1.0)],
        ..Weighted::new("S", "G", &[("S", "G", 1.0)])
    };
    let err = astar_search(&problem).unwrap_err();
    assert!(matches!(err, SearchError::InvalidHeuristic { .. }), "{err}");
    assert!(uniform_cost_search(&problem).unwrap().is_goal_reached());
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: policy limits
// ---------------------------------------------------------------------------

#[test]
fn expansion_budget_stops_before_the_goal() {
    let problem = Weighted::new(
        "S",
        "G",
        &[("S", "A", 1.0), ("A", "B", 1.0), ("B", "C", 1.0), ("C", "G", 1.0)],
    );
    let policy = SearchPolicy::default().with_max_expansions(2);
    for strategy in Strategy::ALL {
        let outcome = graph_search(&problem, strategy, &policy).unwrap();
        assert_eq!(outcome.termination, Termination::ExpansionBudgetExceeded);
        assert!(outcome.termination.is_budget_limited());
        assert_eq!(outcome.stats.expansions, 2);
        assert!(outcome.solution.is_none());
    }
}

#[test]
fn zero_budget_is_an_invalid_policy() {
    let problem = Weighted::new("S", "G", &[("S", "G", 1.0)]);
    let policy = SearchPolicy::default().with_max_expansions(0);
    let err = graph_search(&problem, Strategy::BreadthFirst, &policy).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
}
