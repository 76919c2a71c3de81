//! Run configuration and validation.

use strobe_diag::DiagnosticConfig;

use crate::error::RunError;

/// Complete configuration for a diagnostic run.
///
/// Validation is an explicit pass so configuration mistakes surface at
/// startup, before any solver work; the diagnostics themselves repeat
/// the variant-specific checks at construction and initialize time.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Total step count. Must be at least 1.
    pub num_steps: u64,
    /// Final simulation time. Must be finite and positive.
    pub end_time: f64,
    /// One entry per diagnostic to attach, in attachment order.
    pub diagnostics: Vec<DiagnosticConfig>,
}

impl RunConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), RunError> {
        // 1. Clock parameters must form a usable run.
        if self.num_steps == 0 {
            return Err(RunError::Clock(strobe_core::ClockError::ZeroSteps));
        }
        if !self.end_time.is_finite() || self.end_time <= 0.0 {
            return Err(RunError::Clock(strobe_core::ClockError::InvalidEndTime {
                value: self.end_time,
            }));
        }
        // 2. Every diagnostic configuration must pass its own checks.
        for config in &self.diagnostics {
            config.validate()?;
        }
        Ok(())
    }
}
