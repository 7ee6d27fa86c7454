//! Trait definitions

use crate::element::{FaceLagrangeElement, NothingElement};
use crate::types::{Domination, ReferenceCellType, Result};
use std::fmt::Debug;

/// The kind of an element
///
/// Interpolation and domination only make sense between elements of known
/// kinds, so instead of down-casting, an element reports what it is.
#[derive(Debug, Clone, Copy)]
pub enum ElementVariant<'a> {
    /// A face Lagrange element
    FaceLagrange(&'a FaceLagrangeElement),
    /// The element without degrees of freedom
    Nothing(&'a NothingElement),
    /// Any other element
    Other,
}

pub trait FiniteElement: Debug + Send + Sync {
    //! A scalar finite element defined on a hypercube reference cell

    /// The spatial dimension of the cell
    fn dim(&self) -> usize;

    /// The reference cell type
    fn cell_type(&self) -> ReferenceCellType;

    /// The polynomial degree
    fn degree(&self) -> usize;

    /// The value size
    fn value_size(&self) -> usize {
        1
    }

    /// The number of degrees of freedom on each face
    fn dofs_per_face(&self) -> usize;

    /// The number of degrees of freedom on the cell
    fn dofs_per_cell(&self) -> usize;

    /// The number of degrees of freedom on each subentity of each dimension
    fn dpo_vector(&self) -> Vec<usize>;

    /// The name of the element
    ///
    /// The format is described in [crate::element::name].
    fn name(&self) -> String;

    /// Is the shape function `shape_index` non-zero on face `face_index`?
    fn has_support_on_face(&self, shape_index: usize, face_index: usize) -> bool;

    /// Can constraints between elements of different degree be computed?
    fn hp_constraints_are_implemented(&self) -> bool;

    /// Which element's face dofs dominate on a face shared with `other`?
    fn compare_for_face_domination(&self, other: &dyn FiniteElement) -> Result<Domination>;

    /// The kind of this element
    fn variant(&self) -> ElementVariant<'_>;

    /// Clone into a box
    fn clone_box(&self) -> Box<dyn FiniteElement>;
}

impl Clone for Box<dyn FiniteElement> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
