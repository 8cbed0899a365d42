//! Determinism tests - ensure the same scenario produces identical outputs

use particles_core::tests::test_helpers::{results_approx_equal, run_scenario_source};
use particles_core::run_scenario_file;
use std::path::PathBuf;

fn scenario_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.push("scenarios");
    path.push(filename);
    path
}

const FOUNTAIN: &str = r#"
world:
  particle_limit: 50
steps: 300
bounds:
  min: [0.0, 0.0]
  max: [800.0, 450.0]
sources:
  - kind: point
    position: [400.0, 300.0]
    mass: 200.0
  - kind: constant
    strength: 0.05
emitters:
  - position: [400.0, 60.0]
    velocity: [1.5, -0.5]
    rate: 1
"#;

#[test]
fn test_fountain_determinism() {
    let result1 = run_scenario_source(FOUNTAIN).expect("First run failed");
    let result2 = run_scenario_source(FOUNTAIN).expect("Second run failed");

    assert!(
        results_approx_equal(&result1, &result2, 1e-12),
        "Running the same scenario twice should produce identical results"
    );
}

#[test]
fn test_multiple_runs_determinism() {
    let results: Vec<_> = (0..5)
        .map(|_| run_scenario_source(FOUNTAIN).expect("Run failed"))
        .collect();

    for i in 1..results.len() {
        assert!(
            results_approx_equal(&results[0], &results[i], 1e-12),
            "Run {} should match run 0",
            i
        );
    }
}

#[test]
fn test_bundled_scenario_runs() {
    let path = scenario_path("fountain.yaml");
    let result1 = run_scenario_file(&path).expect("Failed to run bundled scenario");
    let result2 = run_scenario_file(&path).expect("Failed to run bundled scenario");

    assert!(result1.particles.len() <= 1000);
    assert!(results_approx_equal(&result1, &result2, 1e-12));
}

#[test]
fn test_orbit_field_scenario_runs() {
    let path = scenario_path("orbit_field.yaml");
    let source = std::fs::read_to_string(&path).expect("Failed to read file");

    let ctx = particles_core::build_simulation_context_from_source(&source)
        .expect("Failed to build bundled scenario");
    assert_eq!(ctx.sources.len(), 2);
    assert!(ctx.sources[0].is_enabled());
    assert!(!ctx.sources[1].is_enabled());
    assert_eq!(ctx.pool.len(), 3);

    // The sideways field carries every particle out of bounds well before the end
    let result = run_scenario_file(&path).expect("Failed to run bundled scenario");
    assert_eq!(result.steps, 2000);
    assert!(result.particles.is_empty());
}
