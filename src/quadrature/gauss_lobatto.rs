//! Gauss-Lobatto rules on the interval [0, 1].
//!
//! The n-point rule uses the endpoints and the roots of P'_{n-1}, and is
//! exact for polynomials of degree 2n - 3.

use crate::element::polynomials::legendre_and_derivative;
use crate::quadrature::types::{NumericalQuadratureDefinition, NumericalQuadratureGenerator};
use crate::types::{Error, Result};
use std::f64::consts::PI;

const MAX_NEWTON_ITERATIONS: usize = 100;

/// Generator for Gauss-Lobatto rules on [0, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLobatto;

impl NumericalQuadratureGenerator for GaussLobatto {
    fn get_rule(&self, npoints: usize) -> Result<NumericalQuadratureDefinition> {
        gauss_lobatto(npoints)
    }
}

/// Compute the `npoints`-point Gauss-Lobatto rule on [0, 1]
pub fn gauss_lobatto(npoints: usize) -> Result<NumericalQuadratureDefinition> {
    if npoints < 2 {
        return Err(Error::InvalidQuadrature(format!(
            "a Gauss-Lobatto rule needs at least two points, {npoints} requested"
        )));
    }
    let n = npoints - 1;
    let nn = (n * (n + 1)) as f64;

    let mut points = vec![0.0; npoints];
    let mut weights = vec![0.0; npoints];

    // Only the left half is computed, the rule is mirrored about 1/2
    for j in 0..npoints / 2 {
        let x = if j == 0 {
            -1.0
        } else {
            let mut x = -(PI * j as f64 / n as f64).cos();
            for _ in 0..MAX_NEWTON_ITERATIONS {
                let (p, dp) = legendre_and_derivative(n, x);
                let update = (1.0 - x * x) * dp / (nn * p);
                x += update;
                if update.abs() < 1e-15 {
                    break;
                }
            }
            x
        };
        let (p, _) = legendre_and_derivative(n, x);
        let w = 1.0 / (nn * p * p);

        points[j] = (x + 1.0) / 2.0;
        points[n - j] = 1.0 - points[j];
        weights[j] = w;
        weights[n - j] = w;
    }
    if npoints % 2 == 1 {
        let (p, _) = legendre_and_derivative(n, 0.0);
        points[n / 2] = 0.5;
        weights[n / 2] = 1.0 / (nn * p * p);
    }

    Ok(NumericalQuadratureDefinition {
        dim: 1,
        order: 2 * npoints - 3,
        npoints,
        weights,
        points,
    })
}

/// The 1D support points of a face element of the given degree
///
/// These are the Gauss-Lobatto points with `degree + 1` points, or the
/// midpoint of the interval for degree 0.
pub fn gauss_lobatto_points(degree: usize) -> Result<Vec<f64>> {
    if degree == 0 {
        return Ok(vec![0.5]);
    }
    Ok(gauss_lobatto(degree + 1)?.points)
}
