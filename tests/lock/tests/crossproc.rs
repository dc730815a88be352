//! Cross-process determinism: spawns the `solve_fixture` binary under
//! several environment variants and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn baseline_output_covers_every_world_and_strategy() {
    let baseline = run_variant(&workspace_root(), &[]);

    for world in ["river_crossing", "figure_3_31"] {
        for strategy in ["bfs", "dfs", "ucs", "astar"] {
            let prefix = format!("{world}.{strategy}.");
            assert!(
                baseline.contains(&format!("{prefix}digest=sha256:")),
                "missing digest for {prefix}"
            );
            assert!(
                baseline.contains(&format!("{prefix}termination=goal_reached")),
                "{prefix} did not reach the goal"
            );
        }
    }
    assert!(baseline.contains("river_crossing.bfs.length=11"));
    assert!(baseline.contains("river_crossing.astar.expansions=13"));
    assert!(baseline.contains("figure_3_31.bfs.length=5"));
    assert!(baseline.contains("figure_3_31.ucs.length=7"));
    assert!(baseline.contains("figure_3_31.astar.expansions=17"));
    assert_eq!(baseline.lines().count(), 2 * 4 * 5);
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    // Variant 2: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 4: spurious env vars and a chatty log filter.
    let variant_noise = run_variant(
        &root,
        &[
            ("STATESPACE_NOISE", "1"),
            ("RUST_LOG", "trace"),
            ("RANDOM_SEED", "42"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars"
    );
}
