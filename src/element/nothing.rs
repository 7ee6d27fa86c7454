//! The element without degrees of freedom
//!
//! It is placed on cells where no solution is computed; no continuity is
//! enforced across a face it shares with any other element.

use crate::element::name::ElementName;
use crate::element::reference_cell;
use crate::traits::{ElementVariant, FiniteElement};
use crate::types::{Domination, Error, ReferenceCellType, Result};

/// An element with no degrees of freedom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NothingElement {
    dim: usize,
    cell_type: ReferenceCellType,
}

impl NothingElement {
    /// Create the element on a cell of dimension `dim`
    pub fn create(dim: usize) -> Result<Self> {
        if !(1..=3).contains(&dim) {
            return Err(Error::UnsupportedDimension(dim));
        }
        Ok(Self {
            dim,
            cell_type: reference_cell::hypercube(dim)?,
        })
    }
}

impl FiniteElement for NothingElement {
    fn dim(&self) -> usize {
        self.dim
    }
    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }
    fn degree(&self) -> usize {
        0
    }
    fn dofs_per_face(&self) -> usize {
        0
    }
    fn dofs_per_cell(&self) -> usize {
        0
    }
    fn dpo_vector(&self) -> Vec<usize> {
        vec![0; self.dim + 1]
    }
    fn name(&self) -> String {
        ElementName::Nothing { dim: self.dim }.to_string()
    }
    fn has_support_on_face(&self, _shape_index: usize, _face_index: usize) -> bool {
        false
    }
    fn hp_constraints_are_implemented(&self) -> bool {
        true
    }
    fn compare_for_face_domination(&self, _other: &dyn FiniteElement) -> Result<Domination> {
        Ok(Domination::NoRequirements)
    }
    fn variant(&self) -> ElementVariant<'_> {
        ElementVariant::Nothing(self)
    }
    fn clone_box(&self) -> Box<dyn FiniteElement> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::element::FaceLagrangeElement;

    #[test]
    fn test_nothing() {
        let e = NothingElement::create(2).unwrap();
        assert_eq!(e.cell_type(), ReferenceCellType::Quadrilateral);
        assert_eq!(e.dofs_per_face(), 0);
        assert_eq!(e.dofs_per_cell(), 0);
        assert_eq!(e.dpo_vector(), vec![0, 0, 0]);
        assert_eq!(e.name(), "Nothing<2>()");
        assert!(!e.has_support_on_face(0, 0));
        assert!(matches!(e.variant(), ElementVariant::Nothing(_)));
        assert_eq!(
            NothingElement::create(0),
            Err(Error::UnsupportedDimension(0))
        );
    }

    #[test]
    fn test_nothing_domination() {
        let e = NothingElement::create(3).unwrap();
        let f = FaceLagrangeElement::create(3, 2).unwrap();
        assert_eq!(
            e.compare_for_face_domination(&f),
            Ok(Domination::NoRequirements)
        );
        assert_eq!(
            f.compare_for_face_domination(&e),
            Ok(Domination::NoRequirements)
        );
        assert_eq!(
            e.compare_for_face_domination(&e.clone()),
            Ok(Domination::NoRequirements)
        );
    }
}
