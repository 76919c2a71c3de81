//! Spatial grid and interpolation for the Strobe diagnostics framework.
//!
//! The simulation's grid is an external collaborator from the point of
//! view of the diagnostics layer: probes consume it through the narrow
//! [`Grid`] trait — point count, coordinate array, and compiled
//! [`Interpolator`]s for sampling a field at an off-node location.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod interp;

pub use error::GridError;
pub use grid::{Grid, Uniform1D};
pub use interp::Interpolator;
