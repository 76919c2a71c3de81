//! The diagnostic lifecycle contract and per-call context.

use strobe_core::{ResourceCatalog, SimClock};
use strobe_grid::Grid;

use crate::error::DiagnosticError;

/// Read-only collaborators handed to every lifecycle call.
///
/// Diagnostics never hold a reference to the simulation that owns
/// them; the clock and grid flow in per call, so the borrow lasts
/// exactly as long as the call.
pub struct RunContext<'a> {
    /// The driver's simulation clock.
    pub clock: &'a SimClock,
    /// The driver's spatial grid.
    pub grid: &'a dyn Grid,
}

impl<'a> RunContext<'a> {
    /// Bundle the driver's clock and grid for one lifecycle call.
    pub fn new(clock: &'a SimClock, grid: &'a dyn Grid) -> Self {
        Self { clock, grid }
    }
}

/// A lifecycle participant observing the simulation.
///
/// The driver makes four kinds of calls, in a fixed order it is
/// responsible for upholding:
///
/// 1. [`inspect_resources`](Diagnostic::inspect_resources) — zero or
///    more times, once per resource-publishing phase, all before
///    initialize. The diagnostic captures handles to the named fields
///    it needs; when a name is republished, the last capture wins.
/// 2. [`initialize`](Diagnostic::initialize) — exactly once, after
///    resource publication is complete and before the first step.
///    Resolves the output sink, sizes buffers from the clock, binds
///    interpolators, and fails fast if a required field never appeared.
/// 3. [`diagnose`](Diagnostic::diagnose) — once per simulation step,
///    in non-decreasing simulation-time order. Produces at most one
///    record per call.
/// 4. [`finalize`](Diagnostic::finalize) — exactly once, after the
///    last step. Takes one last sample so the final state is always
///    represented, then flushes any buffered output. Terminal: the
///    instance is not reused afterwards.
///
/// All calls are synchronous and run to completion; the subsystem has
/// no threads of its own. Errors are never recovered locally — they
/// surface to the driver, which aborts the run.
pub trait Diagnostic: std::fmt::Debug {
    /// The variant's type name, used by the driver in error reports.
    fn kind(&self) -> &str;

    /// Offer the current published-resources mapping.
    ///
    /// The default implementation ignores it, for variants that need
    /// no field resource.
    fn inspect_resources(&mut self, catalog: &ResourceCatalog) {
        let _ = catalog;
    }

    /// One-time setup after all resources are published.
    fn initialize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError>;

    /// Per-step observation.
    fn diagnose(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError>;

    /// One-time teardown: last sample plus flush.
    fn finalize(&mut self, ctx: &RunContext<'_>) -> Result<(), DiagnosticError>;
}
