//! Strobe: a diagnostics and instrumentation layer for step-based
//! physical simulations.
//!
//! Probes attach to a running simulation without the solver knowing
//! about any specific probe: each diagnostic declares the resources it
//! needs, binds to them during resource inspection, decides when to
//! fire as the run steps forward, buffers its records, and flushes
//! them exactly once at shutdown.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Strobe sub-crates. For most users, adding `strobe` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strobe::prelude::*;
//!
//! // One clock log and one point probe, both printing to stdout.
//! let config = RunConfig {
//!     num_steps: 4,
//!     end_time: 1.0,
//!     diagnostics: vec![
//!         DiagnosticConfig {
//!             kind: "clock".into(),
//!             ..Default::default()
//!         },
//!         DiagnosticConfig {
//!             kind: "point".into(),
//!             field: Some("density".into()),
//!             location: Some(0.5),
//!             ..Default::default()
//!         },
//!     ],
//! };
//!
//! let grid = Uniform1D::new(0.0, 1.0, 16).unwrap();
//! let registry = DiagnosticRegistry::with_builtins();
//! let mut sim = Simulation::new(config, Box::new(grid), &registry).unwrap();
//! sim.publish(Field::shared("density", 16, 1).unwrap());
//!
//! let metrics = sim.run(|_clock, _catalog| {}).unwrap();
//! assert_eq!(metrics.steps, 4);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strobe-core` | Clock, fields, resource catalog |
//! | [`grid`] | `strobe-grid` | Grid trait, 1-D grids, interpolators |
//! | [`diag`] | `strobe-diag` | Diagnostic lifecycle, variants, sinks, registry |
//! | [`engine`] | `strobe-engine` | Lockstep run driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Clock, fields, and the resource catalog (`strobe-core`).
pub use strobe_core as types;

/// Spatial grids and interpolation (`strobe-grid`).
///
/// Provides the [`grid::Grid`] trait and the [`grid::Uniform1D`]
/// backend.
pub use strobe_grid as grid;

/// Diagnostic lifecycle, built-in variants, sinks, and the registry
/// (`strobe-diag`).
///
/// The [`diag::Diagnostic`] trait is the main extension point for
/// user-defined probes.
pub use strobe_diag as diag;

/// The lockstep run driver (`strobe-engine`).
pub use strobe_engine as engine;

/// Common imports for typical Strobe usage.
///
/// ```rust
/// use strobe::prelude::*;
/// ```
pub mod prelude {
    // Core resources
    pub use strobe_core::{Field, FieldHandle, ResourceCatalog, SimClock};

    // Grid
    pub use strobe_grid::{Grid, Interpolator, Uniform1D};

    // Diagnostics
    pub use strobe_diag::{
        Diagnostic, DiagnosticConfig, DiagnosticRegistry, OutputSink, RunContext,
    };

    // Errors
    pub use strobe_diag::{ConfigError, DiagnosticError, SinkError};

    // Engine
    pub use strobe_engine::{RunConfig, RunError, RunMetrics, Simulation};
}
