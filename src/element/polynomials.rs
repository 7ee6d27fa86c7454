//! Polynomials
//!
//! Legendre polynomials (used to locate Gauss-Lobatto points), the 1D
//! Lagrange basis through a set of nodes, and tensor products of it.

use crate::arrays::Array2D;
use crate::types::{Error, Result};
use itertools::Itertools;

/// Evaluate the Legendre polynomial P_n and its derivative at a point in [-1, 1]
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 1..n {
        let k = k as f64;
        let p_next = ((2.0 * k + 1.0) * x * p - k * p_prev) / (k + 1.0);
        p_prev = p;
        p = p_next;
    }
    let dp = if (1.0 - x * x).abs() < 1e-14 {
        // P'_n(±1) = (±1)^(n+1) n(n+1)/2
        let sign = if x > 0.0 || n % 2 == 1 { 1.0 } else { -1.0 };
        sign * (n * (n + 1)) as f64 / 2.0
    } else {
        n as f64 * (x * p - p_prev) / (x * x - 1.0)
    };
    (p, dp)
}

/// The 1D Lagrange basis through a set of nodes
///
/// Basis function `i` is one at `nodes[i]` and zero at every other node.
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeBasis {
    nodes: Vec<f64>,
}

impl LagrangeBasis {
    /// Create the basis through the given (distinct) nodes
    pub fn new(nodes: Vec<f64>) -> Self {
        Self { nodes }
    }
    /// The nodes
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }
    /// The number of basis functions
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// Is the basis empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// The polynomial degree
    pub fn degree(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                what: "Basis function",
                index: i,
                count: self.nodes.len(),
            })
        }
    }

    /// Evaluate basis function `i` at `x`
    ///
    /// Each factor is evaluated as a ratio so that the value at the nodes is
    /// exactly one or zero.
    pub fn value(&self, i: usize, x: f64) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.value_unchecked(i, x))
    }

    /// Evaluate the derivative of basis function `i` at `x`
    pub fn derivative(&self, i: usize, x: f64) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.derivative_unchecked(i, x))
    }

    fn value_unchecked(&self, i: usize, x: f64) -> f64 {
        let xi = self.nodes[i];
        self.nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, xj)| (x - xj) / (xi - xj))
            .product()
    }

    fn derivative_unchecked(&self, i: usize, x: f64) -> f64 {
        let xi = self.nodes[i];
        let mut sum = 0.0;
        for (k, xk) in self.nodes.iter().enumerate() {
            if k == i {
                continue;
            }
            let mut term = 1.0 / (xi - xk);
            for (j, xj) in self.nodes.iter().enumerate() {
                if j != i && j != k {
                    term *= (x - xj) / (xi - xj);
                }
            }
            sum += term;
        }
        sum
    }
}

/// Tensor products of a 1D Lagrange basis in `dim` variables
///
/// Basis functions are numbered with the first coordinate varying fastest:
/// function `i` is the product of the 1D functions `i % n`, `(i / n) % n`, ...
/// where `n` is the size of the 1D basis.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorProductPolynomials {
    basis: LagrangeBasis,
    dim: usize,
}

impl TensorProductPolynomials {
    /// Create the tensor product space
    pub fn new(basis: LagrangeBasis, dim: usize) -> Self {
        Self { basis, dim }
    }
    /// The number of variables
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// The 1D basis
    pub fn basis(&self) -> &LagrangeBasis {
        &self.basis
    }
    /// The polynomial degree in each variable
    pub fn degree(&self) -> usize {
        self.basis.degree()
    }
    /// The number of basis functions
    pub fn n(&self) -> usize {
        self.basis.len().pow(self.dim as u32)
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i < self.n() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                what: "Basis function",
                index: i,
                count: self.n(),
            })
        }
    }

    fn check_point_dim(&self, dim: usize) -> Result<()> {
        if dim == self.dim {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: dim,
            })
        }
    }

    /// The 1D indices making up basis function `i`
    pub fn indices(&self, i: usize) -> Result<Vec<usize>> {
        self.check_index(i)?;
        Ok(self.indices_unchecked(i))
    }

    fn indices_unchecked(&self, i: usize) -> Vec<usize> {
        let n = self.basis.len();
        let mut rest = i;
        (0..self.dim)
            .map(|_| {
                let k = rest % n;
                rest /= n;
                k
            })
            .collect()
    }

    /// All multi-indices in basis function order
    pub fn all_indices(&self) -> Vec<Vec<usize>> {
        // multi_cartesian_product varies the last factor fastest
        (0..self.dim)
            .map(|_| 0..self.basis.len())
            .multi_cartesian_product()
            .map(|mut ix| {
                ix.reverse();
                ix
            })
            .collect()
    }

    /// Evaluate basis function `i` at a point
    pub fn compute_value(&self, i: usize, point: &[f64]) -> Result<f64> {
        self.check_index(i)?;
        self.check_point_dim(point.len())?;
        Ok(self
            .indices_unchecked(i)
            .iter()
            .zip(point)
            .map(|(k, x)| self.basis.value_unchecked(*k, *x))
            .product())
    }

    /// Evaluate the gradient of basis function `i` at a point
    pub fn compute_grad(&self, i: usize, point: &[f64]) -> Result<Vec<f64>> {
        self.check_index(i)?;
        self.check_point_dim(point.len())?;
        let ix = self.indices_unchecked(i);
        Ok((0..self.dim)
            .map(|d| {
                ix.iter()
                    .zip(point)
                    .enumerate()
                    .map(|(e, (k, x))| {
                        if e == d {
                            self.basis.derivative_unchecked(*k, *x)
                        } else {
                            self.basis.value_unchecked(*k, *x)
                        }
                    })
                    .product::<f64>()
            })
            .collect())
    }

    /// Tabulate every basis function at a table of points
    ///
    /// `points` has shape `(npoints, dim)`; the result has shape
    /// `(npoints, n)`.
    pub fn tabulate(&self, points: &Array2D<f64>) -> Result<Array2D<f64>> {
        self.check_point_dim(points.shape().1)?;
        let mut data = Array2D::<f64>::new((points.shape().0, self.n()));
        let indices = self.all_indices();
        for (p, point) in points.rows().enumerate() {
            // 1D values, reused by every product
            let values_1d = point
                .iter()
                .map(|x| {
                    (0..self.basis.len())
                        .map(|k| self.basis.value_unchecked(k, *x))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            for (i, ix) in indices.iter().enumerate() {
                data[(p, i)] = ix
                    .iter()
                    .enumerate()
                    .map(|(d, k)| values_1d[d][*k])
                    .product();
            }
        }
        Ok(data)
    }
}
