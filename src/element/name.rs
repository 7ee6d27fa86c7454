//! Element names
//!
//! Other parts of a finite element code store elements by name and rebuild
//! them later, so the format of a name is fixed. Version 1 of the grammar:
//!
//! ```text
//! name    := family "<" dim ">" "(" args ")"
//! family  := "FaceLagrange" | "Nothing"
//! dim     := integer
//! args    := degree            for FaceLagrange
//!          | ""                for Nothing
//! degree  := integer
//! integer := "0" | nonzero-digit digit*
//! ```
//!
//! Names contain no whitespace and integers have no leading zeros, so every
//! valid name is the canonical name of its element. For example, the face
//! element of degree 3 on hexahedra is `FaceLagrange<3>(3)`.

use crate::element::{FaceLagrangeElement, NothingElement};
use crate::traits::FiniteElement;
use crate::types::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The version of the name grammar
pub const NAME_GRAMMAR_VERSION: u32 = 1;

/// A parsed element name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementName {
    /// A face Lagrange element
    FaceLagrange {
        /// Spatial dimension
        dim: usize,
        /// Polynomial degree
        degree: usize,
    },
    /// The element without degrees of freedom
    Nothing {
        /// Spatial dimension
        dim: usize,
    },
}

impl ElementName {
    /// Create the element with this name
    pub fn create(&self) -> Result<Box<dyn FiniteElement>> {
        Ok(match *self {
            ElementName::FaceLagrange { dim, degree } => {
                Box::new(FaceLagrangeElement::create(dim, degree)?)
            }
            ElementName::Nothing { dim } => Box::new(NothingElement::create(dim)?),
        })
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementName::FaceLagrange { dim, degree } => write!(f, "FaceLagrange<{dim}>({degree})"),
            ElementName::Nothing { dim } => write!(f, "Nothing<{dim}>()"),
        }
    }
}

/// Parse a canonical decimal integer: digits only, no leading zeros
fn parse_integer(s: &str) -> Option<usize> {
    let canonical = s == "0" || !s.starts_with('0');
    if !s.is_empty() && canonical && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

impl FromStr for ElementName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidName(s.to_string());

        let (family, rest) = s.split_once('<').ok_or_else(invalid)?;
        let (dim, rest) = rest.split_once('>').ok_or_else(invalid)?;
        let args = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let dim = parse_integer(dim).ok_or_else(invalid)?;

        match family {
            "FaceLagrange" => Ok(ElementName::FaceLagrange {
                dim,
                degree: parse_integer(args).ok_or_else(invalid)?,
            }),
            "Nothing" if args.is_empty() => Ok(ElementName::Nothing { dim }),
            _ => Err(invalid()),
        }
    }
}

/// Create an element from its name
pub fn create_element_from_name(name: &str) -> Result<Box<dyn FiniteElement>> {
    name.parse::<ElementName>()?.create()
}
