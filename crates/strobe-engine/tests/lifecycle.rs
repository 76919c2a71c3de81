//! End-to-end lifecycle tests: construction, resource binding,
//! initialize-time failures, and the shape of the flushed output.

use strobe_core::Field;
use strobe_diag::{ConfigError, DiagnosticConfig, DiagnosticError, DiagnosticRegistry};
use strobe_engine::{RunConfig, RunError, Simulation};
use strobe_grid::{Grid, Uniform1D};
use strobe_test_utils::{temp_path, RampSolver};

fn csv_entry(kind: &str, field: Option<&str>, path: &std::path::Path) -> DiagnosticConfig {
    DiagnosticConfig {
        kind: kind.into(),
        field: field.map(Into::into),
        output_type: "csv".into(),
        filename: Some(path.to_string_lossy().into_owned()),
        ..Default::default()
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<f64>> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split(',').map(|v| v.parse().unwrap()).collect())
        .collect()
}

#[test]
fn full_run_emits_expected_tables() {
    let point_path = temp_path("lifecycle_point", "csv");
    let field_path = temp_path("lifecycle_field", "csv");
    let clock_path = temp_path("lifecycle_clock", "csv");
    let grid_path = temp_path("lifecycle_grid", "csv");

    let mut point_entry = csv_entry("point", Some("density"), &point_path);
    point_entry.location = Some(0.5);

    let config = RunConfig {
        num_steps: 4,
        end_time: 2.0,
        diagnostics: vec![
            point_entry,
            csv_entry("field", Some("density"), &field_path),
            csv_entry("clock", None, &clock_path),
            csv_entry("grid", None, &grid_path),
        ],
    };
    let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
    let coords = grid.coords().to_vec();
    let registry = DiagnosticRegistry::with_builtins();

    let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
    sim.publish(Field::shared("density", 5, 1).unwrap());

    let solver = RampSolver::new("density", &coords);
    let metrics = sim.run(|clock, catalog| solver.apply(clock, catalog)).unwrap();

    assert_eq!(metrics.steps, 4);
    assert_eq!(metrics.initialized, 4);
    assert_eq!(metrics.finalized, 4);
    assert_eq!(metrics.diagnose_calls, 16);

    // Point probe at node 2 (coordinate 0.5): value = 0.5 + t per
    // step, plus the finalize sample repeating the final state.
    let point_rows = read_rows(&point_path);
    assert_eq!(
        point_rows,
        vec![vec![1.0], vec![1.5], vec![2.0], vec![2.5], vec![2.5]],
    );

    // Field snapshots: one row per step plus the finalize sample, one
    // column per grid point.
    let field_rows = read_rows(&field_path);
    assert_eq!(field_rows.len(), 5);
    for row in &field_rows {
        assert_eq!(row.len(), 5);
    }
    let expected_last: Vec<f64> = coords.iter().map(|c| c + 2.0).collect();
    assert_eq!(field_rows[4], expected_last);

    // Clock log: the step times, then the final time again.
    let clock_rows = read_rows(&clock_path);
    assert_eq!(
        clock_rows,
        vec![vec![0.5], vec![1.0], vec![1.5], vec![2.0], vec![2.0]],
    );

    // Grid dump: the coordinate array, one value per row.
    let grid_rows = read_rows(&grid_path);
    assert_eq!(grid_rows, coords.iter().map(|&c| vec![c]).collect::<Vec<_>>());

    for path in [&point_path, &field_path, &clock_path, &grid_path] {
        std::fs::remove_file(path).unwrap();
    }
}

#[test]
fn missing_field_aborts_before_any_diagnose() {
    let path = temp_path("lifecycle_missing", "csv");
    let config = RunConfig {
        num_steps: 4,
        end_time: 1.0,
        // "densty" is never published; the fail-fast precondition
        // fires at initialize.
        diagnostics: vec![csv_entry("field", Some("densty"), &path)],
    };
    let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
    let registry = DiagnosticRegistry::with_builtins();

    let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
    sim.publish(Field::shared("density", 5, 1).unwrap());

    match sim.run(|_clock, _catalog| {}) {
        Err(RunError::Diagnostic { kind, source }) => {
            assert_eq!(kind, "field");
            match source {
                DiagnosticError::FieldNotFound { name } => assert_eq!(name, "densty"),
                other => panic!("expected FieldNotFound, got {other:?}"),
            }
        }
        other => panic!("expected Diagnostic error, got {other:?}"),
    }

    // Nothing ran and nothing was flushed.
    assert_eq!(sim.metrics().steps, 0);
    assert_eq!(sim.metrics().diagnose_calls, 0);
    assert!(!path.exists());
}

#[test]
fn unknown_diagnostic_type_fails_at_construction() {
    let config = RunConfig {
        num_steps: 2,
        end_time: 1.0,
        diagnostics: vec![DiagnosticConfig {
            kind: "histogram".into(),
            ..Default::default()
        }],
    };
    let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
    let registry = DiagnosticRegistry::with_builtins();

    match Simulation::new(config, Box::new(grid), &registry) {
        Err(RunError::Config(ConfigError::UnknownDiagnosticType { name })) => {
            assert_eq!(name, "histogram");
        }
        other => panic!("expected UnknownDiagnosticType, got {other:?}"),
    }
}

#[test]
fn late_publication_still_captured() {
    let path = temp_path("lifecycle_late", "csv");
    let config = RunConfig {
        num_steps: 2,
        end_time: 1.0,
        diagnostics: vec![csv_entry("field", Some("pressure"), &path)],
    };
    let grid = Uniform1D::new(0.0, 1.0, 3).unwrap();
    let registry = DiagnosticRegistry::with_builtins();

    let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
    // First publishing phase lacks the observed field; a later phase
    // supplies it. Inspection re-runs on every publication.
    sim.publish(Field::shared("density", 3, 1).unwrap());
    sim.publish(Field::shared("pressure", 3, 1).unwrap());

    sim.run(|_clock, _catalog| {}).unwrap();
    assert_eq!(read_rows(&path).len(), 3);
    std::fs::remove_file(&path).unwrap();
}
