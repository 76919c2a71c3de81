//! Attach a point probe and a clock log to a toy advection run.
//!
//! Run with: `cargo run --example point_probe`

use strobe_core::Field;
use strobe_diag::{DiagnosticConfig, DiagnosticRegistry};
use strobe_engine::{RunConfig, Simulation};
use strobe_grid::{Grid, Uniform1D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig {
        num_steps: 8,
        end_time: 2.0,
        diagnostics: vec![
            DiagnosticConfig {
                kind: "point".into(),
                field: Some("density".into()),
                location: Some(0.5),
                ..Default::default()
            },
            DiagnosticConfig {
                kind: "clock".into(),
                ..Default::default()
            },
        ],
    };

    let grid = Uniform1D::new(0.0, 1.0, 32)?;
    let coords = grid.coords().to_vec();
    let registry = DiagnosticRegistry::with_builtins();

    let mut sim = Simulation::new(config, Box::new(grid), &registry)?;
    sim.publish(Field::shared("density", 32, 1)?);

    // A travelling Gaussian pulse stands in for the physics solver.
    let metrics = sim.run(|clock, catalog| {
        let field = catalog.get("density").expect("published above");
        let mut values = field.values_mut();
        for (i, value) in values.iter_mut().enumerate() {
            let x = coords[i] - 0.25 * clock.time();
            *value = (-((x - 0.3) / 0.1).powi(2)).exp();
        }
    })?;

    println!("steps: {}", metrics.steps);
    println!("diagnose calls: {}", metrics.diagnose_calls);
    Ok(())
}
