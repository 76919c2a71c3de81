//! Deterministic stand-ins for the physics solver.
//!
//! Two closed-form drivers for lifecycle and scheduling tests:
//!
//! - [`RampSolver`] — fills a field with `coord + time` each step, so
//!   any sample a diagnostic takes is predictable in closed form.
//! - [`ConstSolver`] — holds a field at a constant value.
//!
//! Plus [`temp_path`], a unique-per-call temp-file path for tests that
//! exercise the file-flush path.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use strobe_core::{ResourceCatalog, SimClock};

/// Fills a field with `value(point) = coord(point) + time` each step.
pub struct RampSolver {
    /// Name of the field to drive.
    pub field_name: String,
    /// Per-point coordinates, reused cyclically over the flat storage.
    pub coords: Vec<f64>,
}

impl RampSolver {
    /// Create a ramp driver for `field_name` over the given coordinates.
    pub fn new(field_name: impl Into<String>, coords: &[f64]) -> Self {
        Self {
            field_name: field_name.into(),
            coords: coords.to_vec(),
        }
    }

    /// Advance the driven field to the clock's current time.
    pub fn apply(&self, clock: &SimClock, catalog: &ResourceCatalog) {
        if let Some(field) = catalog.get(&self.field_name) {
            let mut values = field.values_mut();
            for (i, value) in values.iter_mut().enumerate() {
                *value = self.coords[i % self.coords.len()] + clock.time();
            }
        }
    }
}

/// Holds a field at a constant value.
pub struct ConstSolver {
    /// Name of the field to drive.
    pub field_name: String,
    /// The value written to every slot each step.
    pub value: f64,
}

impl ConstSolver {
    /// Create a constant driver for `field_name`.
    pub fn new(field_name: impl Into<String>, value: f64) -> Self {
        Self {
            field_name: field_name.into(),
            value,
        }
    }

    /// Overwrite the driven field with the constant.
    pub fn apply(&self, _clock: &SimClock, catalog: &ResourceCatalog) {
        if let Some(field) = catalog.get(&self.field_name) {
            field.values_mut().fill(self.value);
        }
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A unique path under the system temp directory.
///
/// Uniqueness combines the process id with a monotonic counter, so
/// concurrently running tests never collide. Callers remove the file
/// themselves.
pub fn temp_path(stem: &str, extension: &str) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "strobe_{stem}_{}_{n}.{extension}",
        std::process::id()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_core::Field;

    #[test]
    fn ramp_tracks_clock_time() {
        let mut catalog = ResourceCatalog::new();
        catalog.publish(Field::shared("density", 3, 1).unwrap());
        let mut clock = SimClock::new(2, 1.0).unwrap();
        let solver = RampSolver::new("density", &[0.0, 10.0, 20.0]);

        clock.advance();
        solver.apply(&clock, &catalog);
        let field = catalog.get("density").unwrap();
        assert_eq!(&*field.values(), &[0.5, 10.5, 20.5]);
    }

    #[test]
    fn const_overwrites_every_slot() {
        let mut catalog = ResourceCatalog::new();
        catalog.publish(Field::shared("density", 4, 1).unwrap());
        let clock = SimClock::new(2, 1.0).unwrap();
        ConstSolver::new("density", 7.0).apply(&clock, &catalog);
        let field = catalog.get("density").unwrap();
        assert!(field.values().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn temp_paths_are_unique() {
        assert_ne!(temp_path("a", "csv"), temp_path("a", "csv"));
    }
}
