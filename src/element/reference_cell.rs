//! Hypercube reference cells
//!
//! Face `f` of a cell of dimension `d` is orthogonal to the axis `f / 2` and
//! lies at coordinate `f % 2` along it, so faces come in low/high pairs:
//! `x=0, x=1, y=0, y=1, z=0, z=1`.

use crate::types::{Error, ReferenceCellType, Result};

/// The topological dimension of the cell
pub fn dim(cell: ReferenceCellType) -> usize {
    match cell {
        ReferenceCellType::Point => 0,
        ReferenceCellType::Interval => 1,
        ReferenceCellType::Quadrilateral => 2,
        ReferenceCellType::Hexahedron => 3,
    }
}

/// The hypercube of the given dimension
pub fn hypercube(dim: usize) -> Result<ReferenceCellType> {
    match dim {
        0 => Ok(ReferenceCellType::Point),
        1 => Ok(ReferenceCellType::Interval),
        2 => Ok(ReferenceCellType::Quadrilateral),
        3 => Ok(ReferenceCellType::Hexahedron),
        _ => Err(Error::UnsupportedDimension(dim)),
    }
}

/// The cell type of the faces of the cell
pub fn facet_type(cell: ReferenceCellType) -> Option<ReferenceCellType> {
    match cell {
        ReferenceCellType::Point => None,
        ReferenceCellType::Interval => Some(ReferenceCellType::Point),
        ReferenceCellType::Quadrilateral => Some(ReferenceCellType::Interval),
        ReferenceCellType::Hexahedron => Some(ReferenceCellType::Quadrilateral),
    }
}

/// The vertices of the reference cell, with the first coordinate varying fastest
pub fn vertices(cell: ReferenceCellType) -> Vec<Vec<f64>> {
    let d = dim(cell);
    (0..1 << d)
        .map(|v| (0..d).map(|k| ((v >> k) & 1) as f64).collect())
        .collect()
}

/// The midpoint of the cell
pub fn midpoint(cell: ReferenceCellType) -> Vec<f64> {
    vec![0.5; dim(cell)]
}

/// The number of subentities of each dimension
pub fn entity_counts(cell: ReferenceCellType) -> Vec<usize> {
    match cell {
        ReferenceCellType::Point => vec![1],
        ReferenceCellType::Interval => vec![2, 1],
        ReferenceCellType::Quadrilateral => vec![4, 4, 1],
        ReferenceCellType::Hexahedron => vec![8, 12, 6, 1],
    }
}

/// The number of faces of the cell
pub fn faces_per_cell(cell: ReferenceCellType) -> usize {
    2 * dim(cell)
}

/// The number of children of the cell under isotropic refinement
pub fn children_per_cell(cell: ReferenceCellType) -> usize {
    1 << dim(cell)
}

/// Map a point on face `face` to the coordinates of the cell
///
/// The face coordinates are copied into the cell coordinates in order,
/// skipping the axis normal to the face, which is set to 0 or 1.
pub fn face_to_cell_coordinates(
    cell: ReferenceCellType,
    face: usize,
    point: &[f64],
) -> Result<Vec<f64>> {
    let d = dim(cell);
    if face >= faces_per_cell(cell) {
        return Err(Error::IndexOutOfRange {
            what: "Face",
            index: face,
            count: faces_per_cell(cell),
        });
    }
    if point.len() + 1 != d {
        return Err(Error::DimensionMismatch {
            expected: d - 1,
            actual: point.len(),
        });
    }
    let normal = face / 2;
    let mut face_coords = point.iter();
    Ok((0..d)
        .map(|e| {
            if e == normal {
                (face % 2) as f64
            } else {
                // point has exactly d - 1 entries
                *face_coords.next().unwrap_or(&0.0)
            }
        })
        .collect())
}

/// Map a point in child `child` of the cell to the coordinates of the cell
///
/// Children are numbered like the vertices: child `c` is the one containing
/// vertex `c`.
pub fn child_to_cell_coordinates(
    cell: ReferenceCellType,
    point: &[f64],
    child: usize,
) -> Result<Vec<f64>> {
    let d = dim(cell);
    if child >= children_per_cell(cell) {
        return Err(Error::IndexOutOfRange {
            what: "Child",
            index: child,
            count: children_per_cell(cell),
        });
    }
    if point.len() != d {
        return Err(Error::DimensionMismatch {
            expected: d,
            actual: point.len(),
        });
    }
    Ok(point
        .iter()
        .enumerate()
        .map(|(k, x)| (x + ((child >> k) & 1) as f64) / 2.0)
        .collect())
}
