//! Type definitions.
use crate::types::Result;

/// A quadrature rule on a reference cell
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalQuadratureDefinition {
    /// The topological dimension of the cell
    pub dim: usize,

    /// The highest polynomial degree integrated exactly
    pub order: usize,

    /// The number of points
    pub npoints: usize,

    /// The weights, summing to the volume of the cell
    pub weights: Vec<f64>,
    /// The points, stored point by point: coordinate `d` of point `i` is
    /// at position `i * dim + d`.
    pub points: Vec<f64>,
}

impl NumericalQuadratureDefinition {
    /// The coordinates of point `index`
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        if index < self.npoints {
            Some(&self.points[index * self.dim..(index + 1) * self.dim])
        } else {
            None
        }
    }
}

/// A family of quadrature rules indexed by their number of points
pub trait NumericalQuadratureGenerator {
    /// The rule with `npoints` points
    fn get_rule(&self, npoints: usize) -> Result<NumericalQuadratureDefinition>;
}
