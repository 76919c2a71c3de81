//! One-shot structural dump of the grid coordinates.

use std::path::PathBuf;

use crate::config::DiagnosticConfig;
use crate::diagnostic::{Diagnostic, RunContext};
use crate::error::{ConfigError, DiagnosticError};
use crate::recorder::CsvRecorder;

/// Writes the grid's coordinate array to a file, once, at initialize.
///
/// The payload is static metadata, not a per-step signal: `diagnose`
/// and `finalize` are no-ops. Because the output is a file by nature,
/// the `filename` key is required whatever the configured
/// `output_type`.
#[derive(Debug)]
pub struct GridDiagnostic {
    filename: PathBuf,
}

impl GridDiagnostic {
    /// Build from configuration. Requires the `filename` key.
    pub fn new(config: &DiagnosticConfig) -> Result<Self, ConfigError> {
        let filename = config.filename.clone().ok_or(ConfigError::MissingKey {
            key: "filename",
            kind: "grid",
        })?;
        Ok(Self {
            filename: filename.into(),
        })
    }

    /// Registry constructor.
    pub fn boxed(config: &DiagnosticConfig) -> Result<Box<dyn Diagnostic>, ConfigError> {
        Ok(Box::new(Self::new(config)?))
    }
}

impl Diagnostic for GridDiagnostic {
    fn kind(&self) -> &str {
        "grid"
    }

    fn initialize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        let coords = ctx.grid.coords();
        let mut recorder = CsvRecorder::new(&self.filename, coords.len(), 1);
        for &x in coords {
            recorder.append(&[x])?;
        }
        recorder.flush_to_file()?;
        Ok(())
    }

    fn diagnose(&mut self, _ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        Ok(())
    }

    fn finalize(&mut self, _ctx: &RunContext<'_>) -> Result<(), DiagnosticError> {
        Ok(())
    }
}
