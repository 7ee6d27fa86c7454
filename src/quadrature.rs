//! Quadrature rules

pub mod gauss_lobatto;
pub mod types;

pub use gauss_lobatto::{gauss_lobatto, gauss_lobatto_points, GaussLobatto};
pub use types::{NumericalQuadratureDefinition, NumericalQuadratureGenerator};
