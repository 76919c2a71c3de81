//! Error types for grid construction and interpolation.

use std::error::Error;
use std::fmt;

/// Errors from grid construction and interpolator use.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A grid needs at least two points to bracket a location.
    EmptyGrid {
        /// The configured point count.
        num_points: usize,
    },
    /// The grid extent is not a finite, non-empty interval.
    InvalidExtent {
        /// Lower bound of the extent.
        min: f64,
        /// Upper bound of the extent.
        max: f64,
    },
    /// The requested sample location lies outside the grid extent.
    LocationOutOfBounds {
        /// The requested location.
        location: f64,
        /// Lower bound of the extent.
        min: f64,
        /// Upper bound of the extent.
        max: f64,
    },
    /// A field passed to an interpolator has the wrong number of points.
    LengthMismatch {
        /// The grid's point count.
        expected: usize,
        /// The field's point count.
        got: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { num_points } => {
                write!(f, "grid needs at least 2 points, got {num_points}")
            }
            Self::InvalidExtent { min, max } => {
                write!(f, "grid extent [{min}, {max}] is not a finite interval")
            }
            Self::LocationOutOfBounds { location, min, max } => {
                write!(f, "location {location} outside grid extent [{min}, {max}]")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "field has {got} points, grid has {expected}")
            }
        }
    }
}

impl Error for GridError {}
