//! Diagnostic lifecycle, variants, and output sinks for the Strobe
//! simulation diagnostics framework.
//!
//! A diagnostic attaches to a running simulation through a four-call
//! lifecycle driven by the run loop: resource inspection (capture
//! handles to named fields), one-time initialization (resolve the
//! output sink, size buffers, bind interpolators), per-step diagnosis
//! (produce one record), and one-time finalization (take a last sample
//! and flush). The solver never knows which diagnostics are attached.
//!
//! Built-in variants cover the common probes: [`PointDiagnostic`]
//! samples a field at one location, [`FieldDiagnostic`] snapshots a
//! whole field (every step or on a dump interval), [`GridDiagnostic`]
//! dumps the static grid coordinates once, and [`ClockDiagnostic`] logs
//! simulation time. New variants plug in through the
//! [`DiagnosticRegistry`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod field;
pub mod grid_dump;
pub mod point;
pub mod recorder;
pub mod registry;
pub mod sink;

pub use clock::ClockDiagnostic;
pub use config::DiagnosticConfig;
pub use diagnostic::{Diagnostic, RunContext};
pub use error::{ConfigError, DiagnosticError, SinkError};
pub use field::{Cadence, FieldDiagnostic};
pub use grid_dump::GridDiagnostic;
pub use point::PointDiagnostic;
pub use recorder::CsvRecorder;
pub use registry::{Constructor, DiagnosticRegistry};
pub use sink::OutputSink;
