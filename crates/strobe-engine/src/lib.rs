//! Lockstep run driver for the Strobe diagnostics framework.
//!
//! [`Simulation`] owns the clock, the grid, and the published resource
//! catalog, and drives every attached diagnostic through its lifecycle
//! in lockstep with time-stepping: resources are offered after each
//! publication, `initialize` runs once before the first step,
//! `diagnose` once per step in time order, and `finalize` exactly once
//! at the end of the run. The physics solver is a caller-supplied
//! callback; the driver knows nothing about what it computes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod simulation;

pub use config::RunConfig;
pub use error::RunError;
pub use metrics::RunMetrics;
pub use simulation::Simulation;
