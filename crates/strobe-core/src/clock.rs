//! The driver-owned simulation clock.

use crate::error::ClockError;

/// Simulation clock advanced once per step by the run driver.
///
/// Diagnostics read the clock through a shared reference and never
/// advance it themselves. Time is recomputed from the step index on
/// every [`advance()`](SimClock::advance) rather than accumulated, so
/// `time` is exact at every step and lands on `end_time` precisely
/// after `num_steps` steps.
///
/// # Examples
///
/// ```
/// use strobe_core::SimClock;
///
/// let mut clock = SimClock::new(4, 2.0).unwrap();
/// assert_eq!(clock.time(), 0.0);
/// assert_eq!(clock.dt(), 0.5);
///
/// for _ in 0..clock.num_steps() {
///     clock.advance();
/// }
/// assert_eq!(clock.time(), 2.0);
/// assert!(clock.is_finished());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimClock {
    time: f64,
    step: u64,
    num_steps: u64,
    end_time: f64,
}

impl SimClock {
    /// Create a clock for a run of `num_steps` steps ending at `end_time`.
    ///
    /// Returns `Err(ClockError::ZeroSteps)` if `num_steps == 0`, or
    /// `Err(ClockError::InvalidEndTime)` if `end_time` is not finite
    /// and positive.
    pub fn new(num_steps: u64, end_time: f64) -> Result<Self, ClockError> {
        if num_steps == 0 {
            return Err(ClockError::ZeroSteps);
        }
        if !end_time.is_finite() || end_time <= 0.0 {
            return Err(ClockError::InvalidEndTime { value: end_time });
        }
        Ok(Self {
            time: 0.0,
            step: 0,
            num_steps,
            end_time,
        })
    }

    /// Current simulation time. Monotonically non-decreasing.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current step index (0 before the first [`advance()`](Self::advance)).
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Total number of steps in the run.
    pub fn num_steps(&self) -> u64 {
        self.num_steps
    }

    /// Final simulation time.
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Step size, `end_time / num_steps`.
    pub fn dt(&self) -> f64 {
        self.end_time / self.num_steps as f64
    }

    /// Advance one step.
    ///
    /// The final step sets `time` to exactly `end_time`; intermediate
    /// steps recompute `time = step * dt` to avoid accumulation drift.
    /// Calling `advance()` past the last step is a no-op.
    pub fn advance(&mut self) {
        if self.step >= self.num_steps {
            return;
        }
        self.step += 1;
        self.time = if self.step == self.num_steps {
            self.end_time
        } else {
            self.step as f64 * self.dt()
        };
    }

    /// Whether the clock has reached the end of the run.
    pub fn is_finished(&self) -> bool {
        self.step >= self.num_steps
    }
}
