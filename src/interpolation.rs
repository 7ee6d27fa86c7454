//! Interpolation between face elements
//!
//! On a face shared by two elements of different degree, the dofs of the
//! higher degree element (the source) are constrained to those of the lower
//! degree element (the target). The constraint matrix has one row per source
//! face dof and one column per target face dof: entry `(i, j)` is the value of
//! target shape function `j` at the support point of source dof `i`.

use crate::arrays::Array2D;
use crate::element::reference_cell;
use crate::element::FaceLagrangeElement;
use crate::traits::{ElementVariant, FiniteElement};
use crate::types::{Error, Result};
use approx::abs_diff_eq;
use log::{debug, error};

/// Options for computing interpolation matrices
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationOptions {
    /// Multiplied by the target degree and the face dimension to give the
    /// tolerance for snapping entries and checking row sums
    tolerance_factor: f64,
}

impl Default for InterpolationOptions {
    fn default() -> Self {
        Self {
            tolerance_factor: 2e-13,
        }
    }
}

impl InterpolationOptions {
    /// The tolerance factor
    pub fn tolerance_factor(&self) -> f64 {
        self.tolerance_factor
    }

    /// Set the tolerance factor
    pub fn set_tolerance_factor(&mut self, factor: f64) {
        self.tolerance_factor = factor;
    }

    /// The tolerance for a target element of the given degree and spatial dimension
    pub fn tolerance(&self, degree: usize, dim: usize) -> f64 {
        self.tolerance_factor * degree as f64 * dim.saturating_sub(1) as f64
    }
}

/// Check that `source` can be constrained to `target`
fn check_pair(target: &FaceLagrangeElement, source: &FaceLagrangeElement) -> Result<()> {
    if source.dim() != target.dim() {
        return Err(Error::DimensionMismatch {
            expected: target.dim(),
            actual: source.dim(),
        });
    }
    // Only the higher degree element can be constrained
    if target.dofs_per_face() > source.dofs_per_face() {
        return Err(Error::InterpolationNotImplemented(format!(
            "cannot constrain {} to {}",
            source.name(),
            target.name()
        )));
    }
    Ok(())
}

/// Evaluate the target face basis at the given face points
///
/// Entries within the tolerance of 0 or 1 are snapped, then every row is
/// checked to sum to 1.
fn evaluate_at_points(
    target: &FaceLagrangeElement,
    points: &Array2D<f64>,
    options: &InterpolationOptions,
) -> Result<Array2D<f64>> {
    let eps = options.tolerance(target.degree(), target.dim());
    let mut matrix = target.polynomial_space().tabulate(points)?;

    let mut snapped = 0;
    for value in matrix.data_mut() {
        let exact = if abs_diff_eq!(*value, 1.0, epsilon = eps) {
            1.0
        } else if abs_diff_eq!(*value, 0.0, epsilon = eps) {
            0.0
        } else {
            continue;
        };
        if *value != exact {
            snapped += 1;
        }
        *value = exact;
    }
    debug!(
        "Interpolation matrix for {}: shape {:?}, {} entries snapped with tolerance {:e}",
        target.name(),
        matrix.shape(),
        snapped,
        eps
    );

    // The target shape functions are a partition of unity
    for (i, sum) in matrix.row_sums().iter().enumerate() {
        if !abs_diff_eq!(*sum, 1.0, epsilon = eps) {
            error!(
                "Row {} of the interpolation matrix for {} sums to {}",
                i,
                target.name(),
                sum
            );
            return Err(Error::InternalConsistency(format!(
                "row {i} of the interpolation matrix for {} sums to {sum}",
                target.name()
            )));
        }
    }
    Ok(matrix)
}

/// The matrix interpolating `target` from `source` on a shared face
///
/// The result has shape `(source.dofs_per_face(), target.dofs_per_face())`.
pub fn face_interpolation_matrix(
    target: &FaceLagrangeElement,
    source: &dyn FiniteElement,
    options: &InterpolationOptions,
) -> Result<Array2D<f64>> {
    let source = match source.variant() {
        ElementVariant::FaceLagrange(e) => e,
        _ => return Err(Error::UnsupportedSourceType(source.name())),
    };
    check_pair(target, source)?;
    evaluate_at_points(target, source.unit_face_support_points(), options)
}

/// The matrix interpolating `target` from `source` on subface `subface`
///
/// `source` lives on the `subface`-th child of the face of `target` after
/// isotropic refinement. The result has shape
/// `(source.dofs_per_face(), target.dofs_per_face())`; it is empty if
/// `source` has no dofs.
pub fn subface_interpolation_matrix(
    target: &FaceLagrangeElement,
    source: &dyn FiniteElement,
    subface: usize,
    options: &InterpolationOptions,
) -> Result<Array2D<f64>> {
    let face_type = target.face_type();
    let nsubfaces = reference_cell::children_per_cell(face_type);
    if subface >= nsubfaces {
        return Err(Error::IndexOutOfRange {
            what: "Subface",
            index: subface,
            count: nsubfaces,
        });
    }

    match source.variant() {
        ElementVariant::FaceLagrange(e) => {
            check_pair(target, e)?;
            let points = e.unit_face_support_points();
            let mut mapped = Array2D::<f64>::new(points.shape());
            for (i, point) in points.rows().enumerate() {
                let parent_point =
                    reference_cell::child_to_cell_coordinates(face_type, point, subface)?;
                for (d, x) in parent_point.iter().enumerate() {
                    mapped[(i, d)] = *x;
                }
            }
            evaluate_at_points(target, &mapped, options)
        }
        ElementVariant::Nothing(e) => {
            if e.dim() != target.dim() {
                return Err(Error::DimensionMismatch {
                    expected: target.dim(),
                    actual: e.dim(),
                });
            }
            Ok(Array2D::new((0, target.dofs_per_face())))
        }
        ElementVariant::Other => Err(Error::InterpolationNotImplemented(format!(
            "subface interpolation from {} to {}",
            source.name(),
            target.name()
        ))),
    }
}
