//! Time-stamp log of the simulation clock.

use crate::config::DiagnosticConfig;
use crate::diagnostic::{Diagnostic, RunContext};
use crate::error::{ConfigError, DiagnosticError};
use crate::sink::OutputSink;

/// Records the simulation's current time value once per step.
///
/// Needs no field resource; the clock arrives with every lifecycle
/// call. The sink dispatch is the same as every other variant: stdout
/// prints each time stamp, csv buffers them into a
/// `(num_steps + 1) × 1` recorder. Finalize appends the final clock
/// time, then flushes.
#[derive(Debug)]
pub struct ClockDiagnostic {
    config: DiagnosticConfig,
    sink: Option<OutputSink>,
}

impl ClockDiagnostic {
    /// Build from configuration. No variant-specific keys.
    pub fn new(config: &DiagnosticConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.clone(),
            sink: None,
        })
    }

    /// Registry constructor.
    pub fn boxed(config: &DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError> {
        Ok(Box::new(Self::new(config)?))
    }

    fn record(&mut self, time: f64) -> Result<(), DiagnosticError> {
        self.sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "clock" })?
            .emit(&[time])?;
        Ok(())
    }
}

impl Diagnostic for ClockDiagnostic {
    fn kind(&self) -> &str {
        "clock"
    }

    fn initialize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        let rows = ctx.clock.num_steps() as usize + 1;
        self.sink = Some(OutputSink::from_config(&self.config, rows, 1, None)?);
        Ok(())
    }

    fn diagnose(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        self.record(ctx.clock.time())
    }

    fn finalize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        self.record(ctx.clock.time())?;
        self.sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "clock" })?
            .finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::SimClock;
    use strobe_grid::Uniform1D;
    use strobe_test_utils::temp_path;

    #[test]
    fn unknown_output_type_fails_at_initialize() {
        let grid = Uniform1D::new(0.0, 1.0, 3).unwrap();
        let clock = SimClock::new(2, 1.0).unwrap();
        let config = DiagnosticConfig {
            kind: "clock".into(),
            output_type: "parquet".into(),
            ..Default::default()
        };
        let mut diag = ClockDiagnostic::new(&config).unwrap();
        match diag.initialize(&RunContext::new(&clock, &grid)) {
            Err(DiagnosticError::Config(ConfigError::UnknownOutputType { value })) => {
                assert_eq!(value, "parquet");
            }
            other => panic!("expected UnknownOutputType, got {other:?}"),
        }
    }

    #[test]
    fn records_each_step_and_final_time() {
        let path = temp_path("clock_log", "csv");
        let grid = Uniform1D::new(0.0, 1.0, 3).unwrap();
        let mut clock = SimClock::new(4, 1.0).unwrap();
        let config = DiagnosticConfig {
            kind: "clock".into(),
            output_type: "csv".into(),
            filename: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };

        let mut diag = ClockDiagnostic::new(&config).unwrap();
        diag.initialize(&RunContext::new(&clock, &grid)).unwrap();
        while !clock.is_finished() {
            clock.advance();
            diag.diagnose(&RunContext::new(&clock, &grid)).unwrap();
        }
        diag.finalize(&RunContext::new(&clock, &grid)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let times: Vec<f64> = contents.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0, 1.0]);
        std::fs::remove_file(&path).unwrap();
    }
}
