//! Finite elements

pub mod face_lagrange;
pub mod name;
pub mod nothing;
pub mod polynomials;
pub mod reference_cell;

pub use face_lagrange::FaceLagrangeElement;
pub use name::{create_element_from_name, ElementName};
pub use nothing::NothingElement;
