//! Benchmark profiles and utilities for the Strobe workspace.
//!
//! Provides pre-built run profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 256-point grid with the full diagnostic set
//! - [`stress_profile`]: 4096-point grid with an unconditional field dump
//!
//! The micro-benchmarks in `benches/` exercise individual components;
//! the profiles drive a whole run end to end.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use strobe_diag::DiagnosticConfig;
use strobe_engine::RunConfig;
use strobe_grid::Uniform1D;

/// Number of steps in every profile run.
pub const PROFILE_STEPS: u64 = 1_000;

/// Grid point count of the reference profile.
pub const REFERENCE_POINTS: usize = 256;

/// Grid point count of the stress profile.
pub const STRESS_POINTS: usize = 4_096;

/// Build the reference grid: 256 evenly spaced points over `[0, 1]`.
pub fn reference_grid() -> Uniform1D {
    Uniform1D::new(0.0, 1.0, REFERENCE_POINTS).unwrap()
}

/// Build the stress grid: 4096 evenly spaced points over `[0, 1]`.
pub fn stress_grid() -> Uniform1D {
    Uniform1D::new(0.0, 1.0, STRESS_POINTS).unwrap()
}

/// Build a reference run profile: 1000 steps, full diagnostic set.
///
/// Attaches one of each built-in variant observing a `density` field:
/// a point probe at the domain midpoint, an interval-gated field dump
/// (every 0.01 time units, 101 snapshots), a clock log, and the static
/// grid dump. All outputs are CSV files under `output_dir`.
pub fn reference_profile(output_dir: &Path) -> RunConfig {
    RunConfig {
        num_steps: PROFILE_STEPS,
        end_time: 1.0,
        diagnostics: vec![
            DiagnosticConfig {
                kind: "point".into(),
                field: Some("density".into()),
                location: Some(0.5),
                output_type: "csv".into(),
                filename: csv(output_dir, "reference_point.csv"),
                ..Default::default()
            },
            DiagnosticConfig {
                kind: "field".into(),
                field: Some("density".into()),
                output_type: "csv".into(),
                filename: csv(output_dir, "reference_field.csv"),
                dump_interval: Some(0.01),
                ..Default::default()
            },
            DiagnosticConfig {
                kind: "clock".into(),
                output_type: "csv".into(),
                filename: csv(output_dir, "reference_clock.csv"),
                ..Default::default()
            },
            DiagnosticConfig {
                kind: "grid".into(),
                output_type: "csv".into(),
                filename: csv(output_dir, "reference_grid.csv"),
                ..Default::default()
            },
        ],
    }
}

/// Build a stress run profile: 1000 steps, unconditional field dump.
///
/// Same shape as [`reference_profile`] but over the 4096-point stress
/// grid, with the field snapshot firing every step instead of on an
/// interval. This is the heavy path: 1001 rows of 4096 values each.
pub fn stress_profile(output_dir: &Path) -> RunConfig {
    RunConfig {
        num_steps: PROFILE_STEPS,
        end_time: 1.0,
        diagnostics: vec![
            DiagnosticConfig {
                kind: "field".into(),
                field: Some("density".into()),
                output_type: "csv".into(),
                filename: csv(output_dir, "stress_field.csv"),
                ..Default::default()
            },
            DiagnosticConfig {
                kind: "clock".into(),
                output_type: "csv".into(),
                filename: csv(output_dir, "stress_clock.csv"),
                ..Default::default()
            },
        ],
    }
}

fn csv(output_dir: &Path, name: &str) -> Option<String> {
    Some(output_dir.join(name).to_string_lossy().into_owned())
}
