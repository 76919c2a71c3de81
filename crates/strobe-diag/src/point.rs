//! Point probe: samples one field at one spatial location.

use std::rc::Rc;

use strobe_core::{FieldHandle, ResourceCatalog};
use strobe_grid::Interpolator;

use crate::config::DiagnosticConfig;
use crate::diagnostic::{Diagnostic, RunContext};
use crate::error::{ConfigError, DiagnosticError};
use crate::sink::OutputSink;

/// Samples a field at a fixed location once per step.
///
/// At initialize the probe asks the grid to compile an
/// [`Interpolator`] for its configured location; each diagnose call
/// evaluates it against the currently captured field values and emits
/// the scalar. With a csv sink the recorder holds `num_steps + 1`
/// rows: one per step plus the final sample taken at finalize.
///
/// Multi-component fields are sampled on the configured `component`
/// column (column 0 when unset).
#[derive(Debug)]
pub struct PointDiagnostic {
    config: DiagnosticConfig,
    field_name: String,
    location: f64,
    component: usize,
    field: Option<FieldHandle>,
    interp: Option<Interpolator>,
    sink: Option<OutputSink>,
    column: Vec<f64>,
}

impl PointDiagnostic {
    /// Build from configuration. Requires the `field` and `location` keys.
    pub fn new(config: &DiagnosticConfig) -> Result<Self, ConfigError> {
        let field_name = config.field.clone().ok_or(ConfigError::MissingKey {
            key: "field",
            kind: "point",
        })?;
        let location = config.location.ok_or(ConfigError::MissingKey {
            key: "location",
            kind: "point",
        })?;
        Ok(Self {
            config: config.clone(),
            field_name,
            location,
            component: config.component.unwrap_or(0),
            field: None,
            interp: None,
            sink: None,
            column: Vec::new(),
        })
    }

    /// Registry constructor.
    pub fn boxed(config: &DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError> {
        Ok(Box::new(Self::new(config)?))
    }

    fn sample(&mut self) -> Result<f64, DiagnosticError> {
        let field = Rc::clone(self.field.as_ref().ok_or_else(|| {
            DiagnosticError::FieldNotFound {
                name: self.field_name.clone(),
            }
        })?);
        let interp = self
            .interp
            .as_ref()
            .ok_or(DiagnosticError::NotInitialized { kind: "point" })?;
        let value = if field.components() == 1 {
            interp.eval(&field.values())?
        } else {
            field.copy_column(self.component, &mut self.column)?;
            interp.eval(&self.column)?
        };
        Ok(value)
    }

    fn record(&mut self) -> Result<(), DiagnosticError> {
        let value = self.sample()?;
        let sink = self
            .sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "point" })?;
        sink.emit(&[value])?;
        Ok(())
    }
}

impl Diagnostic for PointDiagnostic {
    fn kind(&self) -> &str {
        "point"
    }

    fn inspect_resources(&mut self, catalog: &ResourceCatalog) {
        if let Some(handle) = catalog.get(&self.field_name) {
            self.field = Some(Rc::clone(handle));
        }
    }

    fn initialize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        let field = self.field.as_ref().ok_or_else(|| {
            DiagnosticError::FieldNotFound {
                name: self.field_name.clone(),
            }
        })?;
        // Validates the component index against the captured field.
        if field.components() > 1 {
            field.copy_column(self.component, &mut self.column)?;
        }
        self.interp = Some(ctx.grid.interpolator(self.location)?);
        let rows = ctx.clock.num_steps() as usize + 1;
        self.sink = Some(OutputSink::from_config(&self.config, rows, 1, None)?);
        Ok(())
    }

    fn diagnose(&mut self, _ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        self.record()
    }

    fn finalize(&mut self, _ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        self.record()?;
        self.sink
            .as_mut()
            .ok_or(DiagnosticError::NotInitialized { kind: "point" })?
            .finish()?;
        Ok(())
    }
}
