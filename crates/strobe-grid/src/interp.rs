//! Compiled point interpolators.

use smallvec::SmallVec;

use crate::error::GridError;

/// Interpolation stencil: `(node index, weight)` pairs.
///
/// Inline capacity covers linear and cubic stencils; wider schemes
/// spill to the heap transparently.
pub type Stencil = SmallVec<[(usize, f64); 4]>;

/// A compiled sampling function mapping a field array to a scalar.
///
/// Compiled once by [`Grid::interpolator`](crate::Grid::interpolator)
/// when a probe binds its location; evaluation is a weighted sum over
/// the stencil nodes, so the per-step cost of a point probe does not
/// depend on the grid size.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    num_points: usize,
    stencil: Stencil,
}

impl Interpolator {
    /// Build an interpolator from a stencil of `(node, weight)` pairs.
    ///
    /// Grids construct these; the weights are expected to sum to 1 and
    /// every node index must be below `num_points`.
    pub fn new(num_points: usize, stencil: Stencil) -> Self {
        debug_assert!(stencil.iter().all(|&(node, _)| node < num_points));
        Self {
            num_points,
            stencil,
        }
    }

    /// Evaluate against a field array of one value per grid point.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `field` does not
    /// have exactly one value per grid point.
    pub fn eval(&self, field: &[f64]) -> Result<f64, GridError> {
        if field.len() != self.num_points {
            return Err(GridError::LengthMismatch {
                expected: self.num_points,
                got: field.len(),
            });
        }
        Ok(self
            .stencil
            .iter()
            .map(|&(node, weight)| weight * field[node])
            .sum())
    }

    /// The stencil's `(node, weight)` pairs.
    pub fn stencil(&self) -> &[(usize, f64)] {
        &self.stencil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn eval_weights_stencil_nodes() {
        let interp = Interpolator::new(4, smallvec![(1, 0.25), (2, 0.75)]);
        let field = [0.0, 4.0, 8.0, 0.0];
        assert_eq!(interp.eval(&field).unwrap(), 7.0);
    }

    #[test]
    fn eval_length_mismatch_fails() {
        let interp = Interpolator::new(4, smallvec![(1, 0.5), (2, 0.5)]);
        match interp.eval(&[1.0, 2.0]) {
            Err(GridError::LengthMismatch { expected, got }) => {
                assert_eq!(expected, 4);
                assert_eq!(got, 2);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn single_node_stencil_selects_value() {
        let interp = Interpolator::new(3, smallvec![(2, 1.0)]);
        assert_eq!(interp.eval(&[1.0, 2.0, 3.0]).unwrap(), 3.0);
    }
}
