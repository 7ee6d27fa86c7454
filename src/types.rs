//! General type definitions

/// Reference cell type
///
/// Only the hypercubes are needed: face elements live on the faces of
/// quadrilaterals and hexahedra.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum ReferenceCellType {
    /// A point
    Point = 0,
    /// The interval [0, 1]
    Interval = 1,
    /// The unit square
    Quadrilateral = 2,
    /// The unit cube
    Hexahedron = 3,
}

/// Which of two elements sharing a face constrains the other
///
/// The dominating element is the one whose face degrees of freedom stay
/// independent; the dofs of the dominated element are constrained to it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Domination {
    /// This element dominates
    ThisElementDominates,
    /// The other element dominates
    OtherElementDominates,
    /// Either element can be taken as the dominating one
    EitherElementCanDominate,
    /// Neither element dominates
    NeitherElementDominates,
    /// No continuity is enforced across the face
    NoRequirements,
}

impl Domination {
    /// The relation seen from the other element
    pub fn reversed(self) -> Self {
        match self {
            Domination::ThisElementDominates => Domination::OtherElementDominates,
            Domination::OtherElementDominates => Domination::ThisElementDominates,
            other => other,
        }
    }
}

/// Error type
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The source element belongs to a family that cannot be interpolated from
    #[error("Cannot interpolate from element {0}")]
    UnsupportedSourceType(String),
    /// Two dimensions that must agree do not
    #[error("Dimension mismatch: expected {expected}, found {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },
    /// The requested interpolation lies outside the supported combinations
    #[error("Interpolation not implemented: {0}")]
    InterpolationNotImplemented(String),
    /// An internal invariant was violated
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
    /// The requested operation is not defined for this pair of elements
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    /// Face elements only exist in two and three dimensions
    #[error("Unsupported spatial dimension: {0}")]
    UnsupportedDimension(usize),
    /// A face, subface or dof index is out of range
    #[error("{what} index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// The kind of index
        what: &'static str,
        /// The index that was passed
        index: usize,
        /// The number of valid indices
        count: usize,
    },
    /// An element name could not be parsed
    #[error("Invalid element name: {0}")]
    InvalidName(String),
    /// A quadrature rule cannot be created
    #[error("Invalid quadrature: {0}")]
    InvalidQuadrature(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reversed_domination() {
        assert_eq!(
            Domination::ThisElementDominates.reversed(),
            Domination::OtherElementDominates
        );
        assert_eq!(
            Domination::OtherElementDominates.reversed(),
            Domination::ThisElementDominates
        );
        for d in [
            Domination::EitherElementCanDominate,
            Domination::NeitherElementDominates,
            Domination::NoRequirements,
        ] {
            assert_eq!(d.reversed(), d);
        }
    }

    #[test]
    fn test_error_messages() {
        let e = Error::IndexOutOfRange {
            what: "Subface",
            index: 4,
            count: 2,
        };
        assert_eq!(e.to_string(), "Subface index 4 out of range (count 2)");
        let e = Error::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(e.to_string(), "Dimension mismatch: expected 2, found 3");
    }
}
