//! ndface
//!
//! Face-restricted Lagrange finite elements on hypercube cells: elements whose
//! degrees of freedom live only on the faces of a quadrilateral or hexahedron,
//! with the face interpolation and domination queries needed to build
//! continuity constraints between elements of different degree.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod arrays;
pub mod collection;
pub mod element;
pub mod interpolation;
pub mod quadrature;
pub mod traits;
pub mod types;
