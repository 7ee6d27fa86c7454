//! Collections of elements
//!
//! An hp finite element code assigns one element of a collection to each
//! cell. On a face between two cells the dominating element is found, and
//! the dofs of the other element are constrained to it using the face
//! interpolation matrices.

use crate::arrays::Array2D;
use crate::interpolation::{self, InterpolationOptions};
use crate::traits::{ElementVariant, FiniteElement};
use crate::types::{Domination, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// A collection of finite elements
#[derive(Debug, Clone, Default)]
pub struct ElementCollection {
    elements: Vec<Box<dyn FiniteElement>>,
}

impl ElementCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a copy of an element, returning its index
    pub fn push(&mut self, element: &dyn FiniteElement) -> usize {
        self.elements.push(element.clone_box());
        self.elements.len() - 1
    }

    /// The number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element with index `index`
    pub fn get(&self, index: usize) -> Option<&dyn FiniteElement> {
        self.elements.get(index).map(|e| e.as_ref())
    }

    /// Iterate over the elements
    pub fn iter(&self) -> impl Iterator<Item = &dyn FiniteElement> {
        self.elements.iter().map(|e| e.as_ref())
    }

    /// Find an element of the set `indices` that dominates every other element of the set
    ///
    /// Returns `None` if the set is empty, contains an invalid index, or has no
    /// dominating element.
    pub fn find_dominating_element(&self, indices: &[usize]) -> Option<usize> {
        if indices.iter().any(|i| *i >= self.len()) {
            return None;
        }
        indices.iter().copied().find(|candidate| {
            let e = self.elements[*candidate].as_ref();
            indices
                .iter()
                .filter(|other| *other != candidate)
                .all(|other| {
                    matches!(
                        e.compare_for_face_domination(self.elements[*other].as_ref()),
                        Ok(Domination::ThisElementDominates)
                            | Ok(Domination::EitherElementCanDominate)
                            | Ok(Domination::NoRequirements)
                    )
                })
        })
    }

    /// Compute the face interpolation matrices between all face Lagrange elements
    ///
    /// The result contains the matrix for every pair `(target, source)` of
    /// face Lagrange elements where `target` has no more dofs per face than
    /// `source`, keyed by the pair of indices.
    pub fn face_interpolation_matrices(
        &self,
        options: &InterpolationOptions,
    ) -> Result<HashMap<(usize, usize), Array2D<f64>>> {
        let face_elements = self
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| match e.variant() {
                ElementVariant::FaceLagrange(f) => Some((i, f)),
                _ => None,
            })
            .collect::<Vec<_>>();

        let mut pairs = vec![];
        for (i, target) in &face_elements {
            for (j, source) in &face_elements {
                if target.dim() == source.dim() && target.dofs_per_face() <= source.dofs_per_face()
                {
                    pairs.push((*i, *target, *j, *source));
                }
            }
        }
        debug!("Computing {} face interpolation matrices", pairs.len());

        pairs
            .into_par_iter()
            .map(|(i, target, j, source)| {
                interpolation::face_interpolation_matrix(target, source, options)
                    .map(|m| ((i, j), m))
            })
            .collect()
    }
}
