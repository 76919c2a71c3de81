//! The [`Grid`] trait and the evenly spaced 1-D implementation.

use crate::error::GridError;
use crate::interp::Interpolator;

/// The narrow spatial interface diagnostics consume.
///
/// Probes never walk the grid themselves: a full-field snapshot needs
/// only [`num_points()`](Grid::num_points), a structural dump needs
/// [`coords()`](Grid::coords), and a point probe asks the grid to
/// compile an [`Interpolator`] for its configured location once, at
/// bind time.
pub trait Grid {
    /// Number of grid points.
    fn num_points(&self) -> usize;

    /// The coordinate array, one entry per point, strictly increasing.
    fn coords(&self) -> &[f64];

    /// Compile an interpolator sampling a field at `location`.
    ///
    /// Interpolation semantics are the grid's responsibility; the
    /// returned [`Interpolator`] is exact at node-coincident locations.
    /// Returns `Err(GridError::LocationOutOfBounds)` if `location`
    /// falls outside the coordinate range.
    fn interpolator(&self, location: f64) -> Result<Interpolator, GridError>;
}

/// An evenly spaced one-dimensional grid over `[min, max]`.
///
/// # Examples
///
/// ```
/// use strobe_grid::{Grid, Uniform1D};
///
/// let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid.num_points(), 5);
/// assert_eq!(grid.coords(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.spacing(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct Uniform1D {
    min: f64,
    max: f64,
    coords: Vec<f64>,
}

impl Uniform1D {
    /// Create a grid of `num_points` evenly spaced nodes over `[min, max]`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `num_points < 2`, or
    /// `Err(GridError::InvalidExtent)` if the bounds are not finite or
    /// `min >= max`.
    pub fn new(min: f64, max: f64, num_points: usize) -> Result<Self, GridError> {
        if num_points < 2 {
            return Err(GridError::EmptyGrid { num_points });
        }
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(GridError::InvalidExtent { min, max });
        }
        let spacing = (max - min) / (num_points - 1) as f64;
        let mut coords: Vec<f64> = (0..num_points).map(|i| min + i as f64 * spacing).collect();
        // The closed-form node positions can miss max by one ulp.
        coords[num_points - 1] = max;
        Ok(Self { min, max, coords })
    }

    /// Lower bound of the grid extent.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the grid extent.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Distance between adjacent nodes.
    pub fn spacing(&self) -> f64 {
        (self.max - self.min) / (self.coords.len() - 1) as f64
    }
}

impl Grid for Uniform1D {
    fn num_points(&self) -> usize {
        self.coords.len()
    }

    fn coords(&self) -> &[f64] {
        &self.coords
    }

    fn interpolator(&self, location: f64) -> Result<Interpolator, GridError> {
        if !location.is_finite() || location < self.min || location > self.max {
            return Err(GridError::LocationOutOfBounds {
                location,
                min: self.min,
                max: self.max,
            });
        }
        let offset = (location - self.min) / self.spacing();
        let lo = (offset.floor() as usize).min(self.coords.len() - 2);
        let frac = offset - lo as f64;
        Ok(Interpolator::new(
            self.coords.len(),
            smallvec::smallvec![(lo, 1.0 - frac), (lo + 1, frac)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_too_few_points_fails() {
        for num_points in [0, 1] {
            match Uniform1D::new(0.0, 1.0, num_points) {
                Err(GridError::EmptyGrid { .. }) => {}
                other => panic!("expected EmptyGrid for {num_points}, got {other:?}"),
            }
        }
    }

    #[test]
    fn new_rejects_bad_extent() {
        for (min, max) in [(1.0, 0.0), (0.0, 0.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            match Uniform1D::new(min, max, 4) {
                Err(GridError::InvalidExtent { .. }) => {}
                other => panic!("expected InvalidExtent for [{min}, {max}], got {other:?}"),
            }
        }
    }

    #[test]
    fn coords_span_extent_exactly() {
        let grid = Uniform1D::new(-1.0, 2.0, 7).unwrap();
        assert_eq!(grid.coords()[0], -1.0);
        assert_eq!(grid.coords()[6], 2.0);
        assert_eq!(grid.num_points(), 7);
    }

    #[test]
    fn interpolator_out_of_bounds_fails() {
        let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
        for location in [-0.1, 1.1, f64::NAN] {
            match grid.interpolator(location) {
                Err(GridError::LocationOutOfBounds { .. }) => {}
                other => panic!("expected LocationOutOfBounds for {location}, got {other:?}"),
            }
        }
    }

    #[test]
    fn node_location_is_exact() {
        let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
        let field = [10.0, 20.0, 30.0, 40.0, 50.0];
        for (i, &x) in grid.coords().iter().enumerate() {
            let interp = grid.interpolator(x).unwrap();
            assert_eq!(interp.eval(&field).unwrap(), field[i]);
        }
    }

    #[test]
    fn midpoint_is_average_of_neighbours() {
        let grid = Uniform1D::new(0.0, 1.0, 5).unwrap();
        let field = [10.0, 20.0, 30.0, 40.0, 50.0];
        let interp = grid.interpolator(0.375).unwrap();
        assert_eq!(interp.eval(&field).unwrap(), 25.0);
    }

    proptest! {
        #[test]
        fn interpolation_brackets_neighbour_values(
            num_points in 2usize..64,
            t in 0.0f64..1.0,
        ) {
            let grid = Uniform1D::new(0.0, 1.0, num_points).unwrap();
            let field: Vec<f64> = (0..num_points).map(|i| (i as f64).sin()).collect();
            let interp = grid.interpolator(t).unwrap();
            let value = interp.eval(&field).unwrap();
            let (lo, _) = interp.stencil()[0];
            let (hi, _) = interp.stencil()[1];
            let bracket_min = field[lo].min(field[hi]);
            let bracket_max = field[lo].max(field[hi]);
            prop_assert!(value >= bracket_min - 1e-12 && value <= bracket_max + 1e-12);
        }
    }
}
