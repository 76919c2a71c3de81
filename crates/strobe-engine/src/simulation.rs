//! The lockstep simulation driver.

use strobe_core::{FieldHandle, ResourceCatalog, SimClock};
use strobe_diag::{Diagnostic, DiagnosticRegistry, RunContext};
use strobe_grid::Grid;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::metrics::RunMetrics;

/// Single-threaded driver for a diagnostic run.
///
/// Owns the clock, the grid, the published resource catalog, and the
/// diagnostics constructed from configuration. The driver upholds the
/// lifecycle ordering every diagnostic relies on: all resource
/// inspection happens before `initialize`, `initialize` before the
/// first `diagnose`, `diagnose` calls arrive in non-decreasing time
/// order, and `finalize` runs exactly once after the last step.
/// Diagnostics are invoked sequentially in attachment order and are
/// independent of one another.
///
/// # Example
///
/// ```
/// use strobe_core::Field;
/// use strobe_diag::{DiagnosticConfig, DiagnosticRegistry};
/// use strobe_engine::{RunConfig, Simulation};
/// use strobe_grid::Uniform1D;
///
/// let config = RunConfig {
///     num_steps: 4,
///     end_time: 1.0,
///     diagnostics: vec![DiagnosticConfig {
///         kind: "clock".into(),
///         ..Default::default()
///     }],
/// };
/// let grid = Uniform1D::new(0.0, 1.0, 8).unwrap();
/// let registry = DiagnosticRegistry::with_builtins();
///
/// let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
/// sim.publish(Field::shared("density", 8, 1).unwrap());
/// let metrics = sim.run(|_clock, _catalog| {}).unwrap();
/// assert_eq!(metrics.steps, 4);
/// ```
pub struct Simulation {
    clock: SimClock,
    grid: Box<dyn Grid>,
    catalog: ResourceCatalog,
    diagnostics: Vec<Box<dyn Diagnostic>>,
    metrics: RunMetrics,
}

impl Simulation {
    /// Build a driver from configuration.
    ///
    /// Validates the configuration and constructs every diagnostic
    /// through the registry; an unknown type name or invalid entry
    /// fails here, before any resource is published.
    pub fn new(
        config: RunConfig,
        grid: Box<dyn Grid>,
        registry: &DiagnosticRegistry,
    ) -> Result<Self, RunError> {
        config.validate()?;
        let clock = SimClock::new(config.num_steps, config.end_time)?;
        let mut diagnostics = Vec::with_capacity(config.diagnostics.len());
        for entry in &config.diagnostics {
            diagnostics.push(registry.create(entry)?);
        }
        Ok(Self {
            clock,
            grid,
            catalog: ResourceCatalog::new(),
            diagnostics,
            metrics: RunMetrics::default(),
        })
    }

    /// Publish a field resource and offer the catalog to every diagnostic.
    ///
    /// Each publication re-runs resource inspection, so a diagnostic
    /// whose field arrives in a later publishing phase still captures
    /// it, and a republished name is re-captured (last capture wins).
    /// Returns the handle a republication displaced, if any.
    pub fn publish(&mut self, field: FieldHandle) -> Option<FieldHandle> {
        let displaced = self.catalog.publish(field);
        for diagnostic in &mut self.diagnostics {
            diagnostic.inspect_resources(&self.catalog);
        }
        displaced
    }

    /// The driver's clock.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The driver's grid.
    pub fn grid(&self) -> &dyn Grid {
        self.grid.as_ref()
    }

    /// The published resource catalog.
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Counters for the run so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Drive the full run to completion.
    ///
    /// `solver` is the external physics stand-in: it is called once
    /// per step, after the clock advances, to update the published
    /// fields in place. The per-step sequence is solver → diagnose,
    /// so every record reflects the state at the step's time.
    ///
    /// The first diagnostic error aborts the run immediately — no
    /// retry, no partial-result suppression — wrapped with the failing
    /// variant's type name.
    pub fn run<F>(&mut self, mut solver: F) -> Result<RunMetrics, RunError>
    where
        F: FnMut(&SimClock, &ResourceCatalog),
    {
        for diagnostic in &mut self.diagnostics {
            let ctx = RunContext::new(&self.clock, self.grid.as_ref());
            diagnostic.initialize(&ctx).map_err(|source| {
                RunError::Diagnostic {
                    kind: diagnostic.kind().to_string(),
                    source,
                }
            })?;
            self.metrics.initialized += 1;
        }

        while !self.clock.is_finished() {
            self.clock.advance();
            solver(&self.clock, &self.catalog);
            self.metrics.steps += 1;
            for diagnostic in &mut self.diagnostics {
                let ctx = RunContext::new(&self.clock, self.grid.as_ref());
                diagnostic.diagnose(&ctx).map_err(|source| {
                    RunError::Diagnostic {
                        kind: diagnostic.kind().to_string(),
                        source,
                    }
                })?;
                self.metrics.diagnose_calls += 1;
            }
        }

        for diagnostic in &mut self.diagnostics {
            let ctx = RunContext::new(&self.clock, self.grid.as_ref());
            diagnostic.finalize(&ctx).map_err(|source| {
                RunError::Diagnostic {
                    kind: diagnostic.kind().to_string(),
                    source,
                }
            })?;
            self.metrics.finalized += 1;
        }

        Ok(self.metrics.clone())
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("step", &self.clock.step())
            .field("num_steps", &self.clock.num_steps())
            .field("resources", &self.catalog.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}
