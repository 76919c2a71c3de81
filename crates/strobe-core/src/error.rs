//! Error types for the core clock and field resources.

use std::error::Error;
use std::fmt;

/// Errors from [`SimClock`](crate::SimClock) construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ClockError {
    /// The run must have at least one step.
    ZeroSteps,
    /// `end_time` is NaN, infinite, zero, or negative.
    InvalidEndTime {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "num_steps must be at least 1"),
            Self::InvalidEndTime { value } => {
                write!(f, "end_time must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ClockError {}

/// Errors from [`Field`](crate::Field) construction and mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// The field has zero points.
    EmptyField {
        /// Name of the offending field.
        name: String,
    },
    /// The field has zero components per point.
    ZeroComponents {
        /// Name of the offending field.
        name: String,
    },
    /// A write supplied a slice whose length does not match the field.
    LengthMismatch {
        /// Name of the field being written.
        name: String,
        /// Expected flat length (`num_points * components`).
        expected: usize,
        /// Length of the supplied slice.
        got: usize,
    },
    /// A column read named a component the field does not have.
    ComponentOutOfRange {
        /// Name of the field being read.
        name: String,
        /// The requested component index.
        component: usize,
        /// Number of components the field actually has.
        components: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { name } => write!(f, "field '{name}' has zero points"),
            Self::ZeroComponents { name } => {
                write!(f, "field '{name}' has zero components per point")
            }
            Self::LengthMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "field '{name}' write length mismatch: expected {expected}, got {got}"
                )
            }
            Self::ComponentOutOfRange {
                name,
                component,
                components,
            } => {
                write!(
                    f,
                    "field '{name}' has {components} component(s), component {component} requested"
                )
            }
        }
    }
}

impl Error for FieldError {}
