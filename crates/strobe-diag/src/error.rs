//! Error types for the diagnostics subsystem.
//!
//! Three enums, organized by phase: [`ConfigError`] for problems a
//! configuration pass can detect (unknown type names, missing keys),
//! [`DiagnosticError`] for lifecycle failures surfaced to the driver,
//! and [`SinkError`] for the output path (buffer misuse, I/O).
//! Nothing here is retried or suppressed: a misconfigured or
//! unsatisfiable diagnostic aborts the run rather than silently
//! producing incomplete output.

use std::error::Error;
use std::fmt;
use std::io;

use strobe_core::FieldError;
use strobe_grid::GridError;

/// Errors detected while interpreting a diagnostic configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The `kind` names no registered diagnostic type.
    UnknownDiagnosticType {
        /// The unrecognized type name.
        name: String,
    },
    /// The `output_type` is neither `"stdout"` nor `"csv"`.
    UnknownOutputType {
        /// The unrecognized value.
        value: String,
    },
    /// A key the variant requires is absent.
    MissingKey {
        /// The missing key.
        key: &'static str,
        /// The variant that requires it.
        kind: &'static str,
    },
    /// `output_type` is `"csv"` but no filename was given.
    CsvWithoutFilename,
    /// A filename was given but the output is not a file.
    FilenameWithoutCsv,
    /// `dump_interval` is NaN, infinite, zero, or negative.
    InvalidDumpInterval {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDiagnosticType { name } => {
                write!(f, "unknown diagnostic type '{name}'")
            }
            Self::UnknownOutputType { value } => {
                write!(f, "unknown output_type '{value}' (expected 'stdout' or 'csv')")
            }
            Self::MissingKey { key, kind } => {
                write!(f, "'{kind}' diagnostic requires the '{key}' key")
            }
            Self::CsvWithoutFilename => {
                write!(f, "output_type 'csv' requires a filename")
            }
            Self::FilenameWithoutCsv => {
                write!(f, "filename given but output_type is not 'csv'")
            }
            Self::InvalidDumpInterval { value } => {
                write!(f, "dump_interval must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from the output path: buffered recording and storage writes.
#[derive(Debug)]
pub enum SinkError {
    /// An append would exceed the recorder's preallocated row count.
    BufferFull {
        /// The recorder's row capacity.
        capacity: usize,
    },
    /// A record's width does not match the recorder's.
    WidthMismatch {
        /// The recorder's row width.
        expected: usize,
        /// The record's length.
        got: usize,
    },
    /// An I/O error from the storage write at flush time. Not retried.
    Io(io::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferFull { capacity } => {
                write!(f, "recorder buffer full ({capacity} rows)")
            }
            Self::WidthMismatch { expected, got } => {
                write!(f, "record width mismatch: expected {expected}, got {got}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors surfaced to the driver from a diagnostic's lifecycle calls.
#[derive(Debug)]
pub enum DiagnosticError {
    /// A required field was never found among the inspected resources.
    ///
    /// Raised at initialize, before any diagnose call runs; a
    /// misspelled field name in configuration is the usual cause.
    FieldNotFound {
        /// The field name the diagnostic was configured to observe.
        name: String,
    },
    /// A lifecycle call arrived before initialize resolved the sink.
    NotInitialized {
        /// The variant that was invoked out of order.
        kind: &'static str,
    },
    /// Configuration problem detected at initialize (e.g. unknown
    /// `output_type`).
    Config(ConfigError),
    /// Output-path failure.
    Sink(SinkError),
    /// Grid collaborator rejected a location or field length.
    Grid(GridError),
    /// Field resource rejected a read (e.g. component out of range).
    Field(FieldError),
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotFound { name } => {
                write!(f, "diagnostic field '{name}' was not found")
            }
            Self::NotInitialized { kind } => {
                write!(f, "'{kind}' diagnostic used before initialize")
            }
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Sink(e) => write!(f, "sink: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Field(e) => write!(f, "field: {e}"),
        }
    }
}

impl Error for DiagnosticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Sink(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for DiagnosticError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SinkError> for DiagnosticError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

impl From<GridError> for DiagnosticError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<FieldError> for DiagnosticError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
