//! Error types for the run driver.

use std::error::Error;
use std::fmt;

use strobe_core::ClockError;
use strobe_diag::{ConfigError, DiagnosticError};

/// Errors from configuring or driving a run.
#[derive(Debug)]
pub enum RunError {
    /// A diagnostic configuration is invalid.
    Config(ConfigError),
    /// The run's clock parameters are invalid.
    Clock(ClockError),
    /// A diagnostic failed during its lifecycle.
    ///
    /// The run aborts at the first failure; `kind` names the variant
    /// so the offending configuration entry can be found.
    Diagnostic {
        /// Type name of the failing diagnostic.
        kind: String,
        /// The underlying lifecycle error.
        source: DiagnosticError,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Clock(e) => write!(f, "clock: {e}"),
            Self::Diagnostic { kind, source } => {
                write!(f, "'{kind}' diagnostic failed: {source}")
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Clock(e) => Some(e),
            Self::Diagnostic { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ClockError> for RunError {
    fn from(e: ClockError) -> Self {
        Self::Clock(e)
    }
}
