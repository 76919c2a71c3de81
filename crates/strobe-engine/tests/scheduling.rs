//! Scheduling tests: unconditional and interval-gated record counts.

use strobe_core::Field;
use strobe_diag::{DiagnosticConfig, DiagnosticRegistry};
use strobe_engine::{RunConfig, Simulation};
use strobe_grid::Uniform1D;
use strobe_test_utils::{temp_path, ConstSolver};

fn run_field_diagnostic(
    num_steps: u64,
    end_time: f64,
    dump_interval: Option<f64>,
    path: &std::path::Path,
) {
    let config = RunConfig {
        num_steps,
        end_time,
        diagnostics: vec![DiagnosticConfig {
            kind: "field".into(),
            field: Some("density".into()),
            output_type: "csv".into(),
            filename: Some(path.to_string_lossy().into_owned()),
            dump_interval,
            ..Default::default()
        }],
    };
    let grid = Uniform1D::new(0.0, 1.0, 4).unwrap();
    let registry = DiagnosticRegistry::with_builtins();

    let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
    sim.publish(Field::shared("density", 4, 1).unwrap());
    let solver = ConstSolver::new("density", 1.0);
    sim.run(|clock, catalog| solver.apply(clock, catalog)).unwrap();
}

fn count_rows(path: &std::path::Path) -> usize {
    std::fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn unconditional_rows_are_steps_plus_one() {
    for num_steps in [1u64, 3, 8] {
        let path = temp_path("sched_unconditional", "csv");
        run_field_diagnostic(num_steps, 2.0, None, &path);
        assert_eq!(count_rows(&path), num_steps as usize + 1);
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn interval_gated_rows_match_ceiling() {
    // dt = 0.25, period 0.5 over duration 2.5 (all binary-exact):
    // ceil(2.5 / 0.5) + 1 rows.
    let path = temp_path("sched_interval", "csv");
    run_field_diagnostic(10, 2.5, Some(0.5), &path);
    let expected = (2.5f64 / 0.5).ceil() as usize + 1;
    assert_eq!(count_rows(&path), expected);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn spanned_periods_fire_once() {
    // dt = 0.5 spans two 0.2-periods per step; the gate is checked
    // once per step, fires once, and skipped periods are not
    // back-filled: two gated records plus the finalize sample.
    let path = temp_path("sched_spanned", "csv");
    run_field_diagnostic(2, 1.0, Some(0.2), &path);
    assert_eq!(count_rows(&path), 3);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn interval_longer_than_run_records_only_forced_samples() {
    // The gate never opens during the run; only the finalize sample
    // lands in the file.
    let path = temp_path("sched_never", "csv");
    run_field_diagnostic(4, 1.0, Some(5.0), &path);
    assert_eq!(count_rows(&path), 1);
    std::fs::remove_file(&path).unwrap();
}
