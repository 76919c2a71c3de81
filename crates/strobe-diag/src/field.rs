//! Full-field snapshot diagnostic with optional interval scheduling.

use std::rc::Rc;

use strobe_core::{FieldHandle, ResourceCatalog};

use crate::config::DiagnosticConfig;
use crate::diagnostic::{Diagnostic, RunContext};
use crate::error::{ConfigError, DiagnosticError};
use crate::sink::OutputSink;

/// When a scheduled diagnostic produces a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Cadence {
    /// Record on every simulation step.
    EveryStep,
    /// Record when `time >= last_dump + period`, then advance
    /// `last_dump` to the current time.
    ///
    /// The gate is checked once per step: a step whose time delta
    /// spans several periods fires once, and the skipped periods are
    /// not back-filled.
    Interval {
        /// Simulation-time period between samples.
        period: f64,
        /// Time of the most recent sample (0 before the first).
        last_dump: f64,
    },
}

/// Snapshots a whole field, or one column of a multi-column field.
///
/// The one variant with a fail-fast precondition: a field name that
/// never appears among the inspected resources fails at initialize,
/// because a misspelled name in configuration would otherwise go
/// silently unobserved for the entire run.
///
/// Scheduling is selected by the `dump_interval` key: absent means a
/// record every step (`num_steps + 1` buffer rows), present means
/// interval gating (`ceil(end_time / period) + 1` rows). Row width is
/// the grid's point count. Finalize always takes one unconditional
/// sample so the final state is represented.
#[derive(Debug)]
pub struct FieldDiagnostic {
    config: DiagnosticConfig,
    field_name: String,
    component: usize,
    field: Option<FieldHandle>,
    found: bool,
    cadence: Cadence,
    sink: Option<OutputSink>,
    row: Vec<f64>,
}

impl FieldDiagnostic {
    /// Build from configuration. Requires the `field` key; a present
    /// `dump_interval` must be finite and positive.
    pub fn new(config: &DiagnosticConfig) -> Result<Self, ConfigError> {
        let field_name = config.field.clone().ok_or(ConfigError::MissingKey {
            key: "field",
            kind: "field",
        })?;
        let cadence = match config.dump_interval {
            None => Cadence::EveryStep,
            Some(period) if period.is_finite() && period > 0.0 => Cadence::Interval {
                period,
                last_dump: 0.0,
            },
            Some(period) => return Err(ConfigError::InvalidDumpInterval { value: period }),
        };
        Ok(Self {
            config: config.clone(),
            field_name,
            component: config.component.unwrap_or(0),
            field: None,
            found: false,
            cadence,
            sink: None,
            row: Vec::new(),
        })
    }

    /// Registry constructor.
    pub fn boxed(config: &DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError> {
        Ok(Box::new(Self::new(config)?))
    }

    /// The diagnostic's scheduling mode.
    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    fn record(&mut self) -> Result<(), DiagnosticError> {
        let field = Rc::clone(self.field.as_ref().ok_or_else(|| {
            DiagnosticError::FieldNotFound {
                name: self.field_name.clone(),
            }
        })?);
        let sink = self
            .sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "field" })?;
        if field.components() == 1 {
            sink.emit(&field.values())?;
        } else {
            field.copy_column(self.component, &mut self.row)?;
            sink.emit(&self.row)?;
        }
        Ok(())
    }
}

impl Diagnostic for FieldDiagnostic {
    fn kind(&self) -> &str {
        "field"
    }

    fn inspect_resources(&mut self, catalog: &ResourceCatalog) {
        if let Some(handle) = catalog.get(&self.field_name) {
            self.found = true;
            self.field = Some(Rc::clone(handle));
        }
    }

    fn initialize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        if !self.found {
            return Err(DiagnosticError::FieldNotFound {
                name: self.field_name.clone(),
            });
        }
        if let Some(field) = &self.field {
            // Validates the component index against the captured field.
            if field.components() > 1 {
                field.copy_column(self.component, &mut self.row)?;
            }
        }
        let rows = match &self.cadence {
            Cadence::EveryStep => ctx.clock.num_steps() as usize + 1,
            Cadence::Interval { period, .. } => {
                (ctx.clock.end_time() / period).ceil() as usize + 1
            }
        };
        let width = ctx.grid.num_points();
        self.sink = Some(OutputSink::from_config(
            &self.config,
            rows,
            width,
            Some(self.field_name.clone()),
        )?);
        Ok(())
    }

    fn diagnose(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        let fire = match &mut self.cadence {
            Cadence::EveryStep => true,
            Cadence::Interval { period, last_dump } => {
                if ctx.clock.time() >= *last_dump + *period {
                    *last_dump = ctx.clock.time();
                    true
                } else {
                    false
                }
            }
        };
        if fire {
            self.record()?;
        }
        Ok(())
    }

    fn finalize(&mut self, _ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        self.record()?;
        self.sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "field" })?
            .finish()?;
        Ok(())
    }
}
