//! Binary that runs every strategy on every bundled world and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `<world>.<strategy>.<field>=<value>` line per field, in
//! world then `Strategy::ALL` order.

use statespace_harness::contract::World;
use statespace_harness::report::{report_all, SearchReport};
use statespace_harness::worlds::figure_3_31;
use statespace_harness::worlds::river_crossing::RiverCrossing;
use statespace_search::SearchPolicy;

fn print_reports(reports: &[SearchReport]) {
    for report in reports {
        let prefix = format!("{}.{}", report.world_id, report.strategy.label());
        let value = report.value().expect("report bytes are valid JSON");
        let solution = &value["solution"];

        println!("{prefix}.digest={}", report.digest);
        println!("{prefix}.termination={}", value["termination"].as_str().unwrap_or(""));
        println!("{prefix}.length={}", solution["length"]);
        println!("{prefix}.cost={}", solution["cost"]);
        println!("{prefix}.expansions={}", value["stats"]["expansions"]);
    }
}

fn solve<W: World + ?Sized>(world: &W, policy: &SearchPolicy) {
    let reports = report_all(world, policy).expect("search run failed");
    print_reports(&reports);
}

fn main() {
    let policy = SearchPolicy::default();
    solve(&RiverCrossing::classic(), &policy);
    solve(
        &figure_3_31::problem().expect("figure 3.31 builds"),
        &policy,
    );
}
