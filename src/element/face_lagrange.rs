//! Lagrange elements on the faces of a cell
//!
//! The shape functions of a face Lagrange element live only on the faces of
//! a quadrilateral or hexahedron. On each face they are the tensor-product
//! Lagrange polynomials through the Gauss-Lobatto points, so every degree of
//! freedom belongs to exactly one face and the dofs of a cell are numbered
//! face by face.

use crate::arrays::Array2D;
use crate::element::name::ElementName;
use crate::element::polynomials::{LagrangeBasis, TensorProductPolynomials};
use crate::element::reference_cell;
use crate::interpolation::{self, InterpolationOptions};
use crate::quadrature::gauss_lobatto_points;
use crate::traits::{ElementVariant, FiniteElement};
use crate::types::{Domination, Error, ReferenceCellType, Result};
use log::debug;
use std::cmp::Ordering;

/// The number of dofs on each subentity of each dimension
///
/// All dofs are associated with the faces (entities of dimension
/// `dim - 1`); vertices, edges and the interior carry none.
pub fn dpo_vector(dim: usize, degree: usize) -> Vec<usize> {
    let mut dpo = vec![0; dim + 1];
    if dim > 0 {
        dpo[dim - 1] = (degree + 1).pow(dim as u32 - 1);
    }
    dpo
}

/// A Lagrange element on the faces of a cell
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLagrangeElement {
    dim: usize,
    degree: usize,
    cell_type: ReferenceCellType,
    face_type: ReferenceCellType,
    dofs_per_face: usize,
    dofs_per_cell: usize,
    poly_space: TensorProductPolynomials,
    unit_face_support_points: Array2D<f64>,
    unit_support_points: Array2D<f64>,
}

impl FaceLagrangeElement {
    /// Create a face Lagrange element on a cell of dimension `dim`
    pub fn create(dim: usize, degree: usize) -> Result<Self> {
        if !(2..=3).contains(&dim) {
            return Err(Error::UnsupportedDimension(dim));
        }
        let cell_type = reference_cell::hypercube(dim)?;
        let face_type = reference_cell::hypercube(dim - 1)?;
        let fdim = dim - 1;

        let nodes = gauss_lobatto_points(degree)?;
        let poly_space =
            TensorProductPolynomials::new(LagrangeBasis::new(nodes.clone()), fdim);
        let dofs_per_face = dpo_vector(dim, degree)[fdim];
        let faces_per_cell = reference_cell::faces_per_cell(cell_type);
        let dofs_per_cell = faces_per_cell * dofs_per_face;

        // Face support point i is the node of basis function i. For degree 0
        // the single node is 1/2, so this is the centroid of the face.
        let mut unit_face_support_points = Array2D::<f64>::new((dofs_per_face, fdim));
        for (i, ix) in poly_space.all_indices().iter().enumerate() {
            for (d, k) in ix.iter().enumerate() {
                unit_face_support_points[(i, d)] = nodes[*k];
            }
        }

        let mut unit_support_points = Array2D::<f64>::new((dofs_per_cell, dim));
        for face in 0..faces_per_cell {
            for (i, face_point) in unit_face_support_points.rows().enumerate() {
                let point =
                    reference_cell::face_to_cell_coordinates(cell_type, face, face_point)?;
                for (e, x) in point.iter().enumerate() {
                    unit_support_points[(face * dofs_per_face + i, e)] = *x;
                }
            }
        }

        let element = Self {
            dim,
            degree,
            cell_type,
            face_type,
            dofs_per_face,
            dofs_per_cell,
            poly_space,
            unit_face_support_points,
            unit_support_points,
        };
        debug!(
            "Created {} with {} dofs per face and {} dofs per cell",
            element.name(),
            dofs_per_face,
            dofs_per_cell
        );
        Ok(element)
    }

    /// The reference cell type of the faces
    pub fn face_type(&self) -> ReferenceCellType {
        self.face_type
    }

    /// The polynomial space on each face
    pub fn polynomial_space(&self) -> &TensorProductPolynomials {
        &self.poly_space
    }

    /// The support points of the dofs of one face, in face coordinates
    ///
    /// This has shape `(dofs_per_face, dim - 1)`.
    pub fn unit_face_support_points(&self) -> &Array2D<f64> {
        &self.unit_face_support_points
    }

    /// The support points of all dofs of the cell, in cell coordinates
    ///
    /// This has shape `(dofs_per_cell, dim)`.
    pub fn unit_support_points(&self) -> &Array2D<f64> {
        &self.unit_support_points
    }

    /// The support point of face dof `index`
    pub fn unit_face_support_point(&self, index: usize) -> Option<&[f64]> {
        self.unit_face_support_points.row(index)
    }

    /// The support point of cell dof `index`
    pub fn unit_support_point(&self, index: usize) -> Option<&[f64]> {
        self.unit_support_points.row(index)
    }

    fn check_dof_and_face(&self, shape_index: usize, face_index: usize) -> Result<()> {
        if shape_index >= self.dofs_per_cell {
            return Err(Error::IndexOutOfRange {
                what: "Shape function",
                index: shape_index,
                count: self.dofs_per_cell,
            });
        }
        let nfaces = reference_cell::faces_per_cell(self.cell_type);
        if face_index >= nfaces {
            return Err(Error::IndexOutOfRange {
                what: "Face",
                index: face_index,
                count: nfaces,
            });
        }
        Ok(())
    }

    fn check_face_point(&self, point: &[f64]) -> Result<()> {
        if point.len() != self.dim - 1 {
            Err(Error::DimensionMismatch {
                expected: self.dim - 1,
                actual: point.len(),
            })
        } else {
            Ok(())
        }
    }

    /// The value of a shape function at a point on a face
    ///
    /// `point` is given in the coordinates of face `face_index`. Shape
    /// functions that belong to another face are zero.
    pub fn face_shape_value(
        &self,
        shape_index: usize,
        face_index: usize,
        point: &[f64],
    ) -> Result<f64> {
        self.check_dof_and_face(shape_index, face_index)?;
        self.check_face_point(point)?;
        if self.has_support_on_face(shape_index, face_index) {
            self.poly_space
                .compute_value(shape_index % self.dofs_per_face, point)
        } else {
            Ok(0.0)
        }
    }

    /// The tangential gradient of a shape function at a point on a face
    ///
    /// The gradient is taken with respect to the face coordinates.
    pub fn face_shape_grad(
        &self,
        shape_index: usize,
        face_index: usize,
        point: &[f64],
    ) -> Result<Vec<f64>> {
        self.check_dof_and_face(shape_index, face_index)?;
        self.check_face_point(point)?;
        if self.has_support_on_face(shape_index, face_index) {
            self.poly_space
                .compute_grad(shape_index % self.dofs_per_face, point)
        } else {
            Ok(vec![0.0; self.dim - 1])
        }
    }

    /// Tabulate all shape functions of the cell at points on a face
    ///
    /// `points` has shape `(npoints, dim - 1)` and is given in the coordinates
    /// of face `face_index`. The result has shape `(npoints, dofs_per_cell)`.
    pub fn tabulate_face(&self, face_index: usize, points: &Array2D<f64>) -> Result<Array2D<f64>> {
        self.check_dof_and_face(0, face_index)?;
        let face_table = self.poly_space.tabulate(points)?;
        let mut table = Array2D::<f64>::new((points.shape().0, self.dofs_per_cell));
        let offset = face_index * self.dofs_per_face;
        for (p, row) in face_table.rows().enumerate() {
            for (i, value) in row.iter().enumerate() {
                table[(p, offset + i)] = *value;
            }
        }
        Ok(table)
    }

    /// The matrix interpolating this element from `source` on a shared face
    ///
    /// Entry `(i, j)` is the value of this element's face shape function `j`
    /// at the support point of `source`'s face dof `i`.
    pub fn face_interpolation_matrix(&self, source: &dyn FiniteElement) -> Result<Array2D<f64>> {
        self.face_interpolation_matrix_with_options(source, &InterpolationOptions::default())
    }

    /// The face interpolation matrix, with explicit options
    pub fn face_interpolation_matrix_with_options(
        &self,
        source: &dyn FiniteElement,
        options: &InterpolationOptions,
    ) -> Result<Array2D<f64>> {
        interpolation::face_interpolation_matrix(self, source, options)
    }

    /// The matrix interpolating this element from `source` on subface `subface`
    ///
    /// `source` lives on the `subface`-th child of the face of this element.
    pub fn subface_interpolation_matrix(
        &self,
        source: &dyn FiniteElement,
        subface: usize,
    ) -> Result<Array2D<f64>> {
        self.subface_interpolation_matrix_with_options(
            source,
            subface,
            &InterpolationOptions::default(),
        )
    }

    /// The subface interpolation matrix, with explicit options
    pub fn subface_interpolation_matrix_with_options(
        &self,
        source: &dyn FiniteElement,
        subface: usize,
        options: &InterpolationOptions,
    ) -> Result<Array2D<f64>> {
        interpolation::subface_interpolation_matrix(self, source, subface, options)
    }
}

impl FiniteElement for FaceLagrangeElement {
    fn dim(&self) -> usize {
        self.dim
    }
    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }
    fn degree(&self) -> usize {
        self.degree
    }
    fn dofs_per_face(&self) -> usize {
        self.dofs_per_face
    }
    fn dofs_per_cell(&self) -> usize {
        self.dofs_per_cell
    }
    fn dpo_vector(&self) -> Vec<usize> {
        dpo_vector(self.dim, self.degree)
    }
    fn name(&self) -> String {
        ElementName::FaceLagrange {
            dim: self.dim,
            degree: self.degree,
        }
        .to_string()
    }
    fn has_support_on_face(&self, shape_index: usize, face_index: usize) -> bool {
        face_index == shape_index / self.dofs_per_face
    }
    fn hp_constraints_are_implemented(&self) -> bool {
        true
    }
    fn compare_for_face_domination(&self, other: &dyn FiniteElement) -> Result<Domination> {
        match other.variant() {
            ElementVariant::FaceLagrange(e) if e.dim == self.dim => {
                Ok(match self.degree.cmp(&e.degree) {
                    Ordering::Less => Domination::ThisElementDominates,
                    Ordering::Equal => Domination::EitherElementCanDominate,
                    Ordering::Greater => Domination::OtherElementDominates,
                })
            }
            // No continuity is required across a face to an element without dofs
            ElementVariant::Nothing(e) if e.dim() == self.dim => Ok(Domination::NoRequirements),
            _ => Err(Error::NotImplemented(format!(
                "face domination between {} and {}",
                self.name(),
                other.name()
            ))),
        }
    }
    fn variant(&self) -> ElementVariant<'_> {
        ElementVariant::FaceLagrange(self)
    }
    fn clone_box(&self) -> Box<dyn FiniteElement> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use paste::paste;

    #[test]
    fn test_unsupported_dimension() {
        assert_eq!(
            FaceLagrangeElement::create(1, 2),
            Err(Error::UnsupportedDimension(1))
        );
        assert_eq!(
            FaceLagrangeElement::create(4, 2),
            Err(Error::UnsupportedDimension(4))
        );
    }

    #[test]
    fn test_dpo_vector() {
        assert_eq!(dpo_vector(2, 0), vec![0, 1, 0]);
        assert_eq!(dpo_vector(2, 3), vec![0, 4, 0]);
        assert_eq!(dpo_vector(3, 0), vec![0, 0, 1, 0]);
        assert_eq!(dpo_vector(3, 2), vec![0, 0, 9, 0]);
    }

    #[test]
    fn test_face_lagrange_2_quadrilateral() {
        let e = FaceLagrangeElement::create(2, 2).unwrap();
        assert_eq!(e.cell_type(), ReferenceCellType::Quadrilateral);
        assert_eq!(e.face_type(), ReferenceCellType::Interval);
        assert_eq!(e.dofs_per_face(), 3);
        assert_eq!(e.dofs_per_cell(), 12);
        assert_eq!(e.value_size(), 1);
        assert_eq!(e.unit_face_support_points().data(), &[0.0, 0.5, 1.0]);

        let expected = [
            // x = 0
            [0.0, 0.0],
            [0.0, 0.5],
            [0.0, 1.0],
            // x = 1
            [1.0, 0.0],
            [1.0, 0.5],
            [1.0, 1.0],
            // y = 0
            [0.0, 0.0],
            [0.5, 0.0],
            [1.0, 0.0],
            // y = 1
            [0.0, 1.0],
            [0.5, 1.0],
            [1.0, 1.0],
        ];
        for (i, p) in expected.iter().enumerate() {
            assert_eq!(e.unit_support_point(i).unwrap(), p);
        }
        assert!(e.unit_support_point(12).is_none());
    }

    #[test]
    fn test_face_lagrange_0() {
        let e = FaceLagrangeElement::create(3, 0).unwrap();
        assert_eq!(e.dofs_per_face(), 1);
        assert_eq!(e.dofs_per_cell(), 6);
        assert_eq!(e.unit_face_support_point(0).unwrap(), &[0.5, 0.5]);
        assert_eq!(e.unit_support_point(0).unwrap(), &[0.0, 0.5, 0.5]);
        assert_eq!(e.unit_support_point(3).unwrap(), &[0.5, 1.0, 0.5]);
        assert_eq!(e.unit_support_point(4).unwrap(), &[0.5, 0.5, 0.0]);
        for f in 0..6 {
            assert_eq!(e.face_shape_value(f, f, &[0.1, 0.9]).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_face_support_point_ordering() {
        let e = FaceLagrangeElement::create(3, 1).unwrap();
        let expected = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        for (i, p) in expected.iter().enumerate() {
            assert_eq!(e.unit_face_support_point(i).unwrap(), p);
        }
        // Face 2 is y = 0, face coordinates are (x, z)
        assert_eq!(e.unit_support_point(2 * 4 + 1).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(e.unit_support_point(2 * 4 + 2).unwrap(), &[0.0, 0.0, 1.0]);
        // Face 5 is z = 1
        assert_eq!(e.unit_support_point(5 * 4 + 3).unwrap(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_name() {
        assert_eq!(
            FaceLagrangeElement::create(2, 3).unwrap().name(),
            "FaceLagrange<2>(3)"
        );
        assert_eq!(
            FaceLagrangeElement::create(3, 0).unwrap().name(),
            "FaceLagrange<3>(0)"
        );
    }

    #[test]
    fn test_clone() {
        let e = FaceLagrangeElement::create(3, 2).unwrap();
        let c = e.clone();
        assert_eq!(c, e);
        let b = e.clone_box();
        assert_eq!(b.name(), e.name());
        assert_eq!(b.degree(), 2);
        assert_eq!(b.dofs_per_cell(), e.dofs_per_cell());
    }

    #[test]
    fn test_shape_values_on_faces() {
        let e = FaceLagrangeElement::create(2, 1).unwrap();
        let x = 0.3;
        assert_relative_eq!(e.face_shape_value(2, 1, &[x]).unwrap(), 1.0 - x);
        assert_relative_eq!(e.face_shape_value(3, 1, &[x]).unwrap(), x);
        assert_eq!(e.face_shape_value(0, 1, &[x]).unwrap(), 0.0);
        assert_eq!(e.face_shape_grad(3, 1, &[x]).unwrap(), vec![1.0]);
        assert_eq!(e.face_shape_grad(3, 0, &[x]).unwrap(), vec![0.0]);
        assert!(matches!(
            e.face_shape_value(8, 1, &[x]),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            e.face_shape_value(0, 4, &[x]),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            e.face_shape_value(0, 0, &[x, x]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_tabulate_face() {
        let e = FaceLagrangeElement::create(3, 2).unwrap();
        let points = Array2D::from_data(vec![0.1, 0.2, 0.5, 0.5, 0.9, 0.3], (3, 2)).unwrap();
        let table = e.tabulate_face(4, &points).unwrap();
        assert_eq!(table.shape(), (3, e.dofs_per_cell()));
        for (p, point) in points.rows().enumerate() {
            let mut sum = 0.0;
            for i in 0..e.dofs_per_cell() {
                let value = table[(p, i)];
                assert_eq!(value, e.face_shape_value(i, 4, point).unwrap());
                if !e.has_support_on_face(i, 4) {
                    assert_eq!(value, 0.0);
                }
                sum += value;
            }
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-14);
        }

        let bad_points = Array2D::<f64>::new((2, 3));
        assert!(matches!(
            e.tabulate_face(0, &bad_points),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            e.tabulate_face(6, &points),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_domination() {
        let e1 = FaceLagrangeElement::create(2, 1).unwrap();
        let e2 = FaceLagrangeElement::create(2, 2).unwrap();
        let e2b = FaceLagrangeElement::create(2, 2).unwrap();
        let e3d = FaceLagrangeElement::create(3, 1).unwrap();
        assert!(e1.hp_constraints_are_implemented());
        assert_eq!(
            e1.compare_for_face_domination(&e2),
            Ok(Domination::ThisElementDominates)
        );
        assert_eq!(
            e2.compare_for_face_domination(&e1),
            Ok(Domination::OtherElementDominates)
        );
        assert_eq!(
            e2.compare_for_face_domination(&e2b),
            Ok(Domination::EitherElementCanDominate)
        );
        assert!(matches!(
            e1.compare_for_face_domination(&e3d),
            Err(Error::NotImplemented(_))
        ));
    }

    macro_rules! test_face_element {
        (@dims [$($dim:tt),+] $degrees:tt) => {
            $(test_face_element!(@degrees $dim $degrees);)+
        };
        (@degrees $dim:tt [$($degree:tt),+]) => {
            $(
            paste! {
                #[test]
                fn [<test_face_lagrange_ $dim d_degree_ $degree>]() {
                    let e = FaceLagrangeElement::create($dim, $degree).unwrap();
                    let nfaces = 2 * $dim;
                    let dpf = ($degree + 1usize).pow($dim - 1);
                    assert_eq!(e.dofs_per_face(), dpf);
                    assert_eq!(e.dofs_per_cell(), nfaces * dpf);
                    assert_eq!(e.dpo_vector().iter().sum::<usize>(), dpf);
                    assert_eq!(e.unit_face_support_points().shape(), (dpf, $dim - 1));
                    assert_eq!(e.unit_support_points().shape(), (nfaces * dpf, $dim));

                    // Nodal basis
                    let eps = 2e-13 * $degree as f64 * ($dim - 1) as f64;
                    for (j, point) in e.unit_face_support_points().rows().enumerate() {
                        for i in 0..dpf {
                            let value = e.polynomial_space().compute_value(i, point).unwrap();
                            if i == j {
                                assert_eq!(value, 1.0);
                            } else {
                                assert!(value.abs() <= eps);
                            }
                        }
                    }

                    // Each dof belongs to exactly one face
                    for i in 0..e.dofs_per_cell() {
                        let faces = (0..nfaces)
                            .filter(|f| e.has_support_on_face(i, *f))
                            .collect::<Vec<_>>();
                        assert_eq!(faces, vec![i / dpf]);
                    }

                    // Cell support points are the embedded face support points
                    for f in 0..nfaces {
                        for (i, face_point) in e.unit_face_support_points().rows().enumerate() {
                            let p = reference_cell::face_to_cell_coordinates(
                                e.cell_type(), f, face_point,
                            )
                            .unwrap();
                            assert_eq!(e.unit_support_point(f * dpf + i).unwrap(), &p[..]);
                            assert_eq!(p[f / 2], (f % 2) as f64);
                        }
                    }
                }
            }
            )+
        };
        ($($dim:tt),+; $($degree:tt),+) => {
            test_face_element!(@dims [$($dim),+] [$($degree),+]);
        };
    }

    test_face_element!(2, 3; 0, 1, 2, 3, 4, 5, 7);
}
