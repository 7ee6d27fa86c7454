//! Dense two-dimensional arrays
//!
//! Point tables and interpolation matrices are stored row-major: a table of
//! `n` points in `d` dimensions has shape `(n, d)`.

use num::Num;
use std::ops::{Index, IndexMut};

/// A row-major two-dimensional array
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    data: Vec<T>,
    shape: (usize, usize),
}

impl<T: Num + Copy> Array2D<T> {
    /// Create an array filled with zeros
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            data: vec![T::zero(); shape.0 * shape.1],
            shape,
        }
    }

    /// Sum of the entries of each row
    pub fn row_sums(&self) -> Vec<T> {
        self.rows()
            .map(|row| row.iter().fold(T::zero(), |acc, v| acc + *v))
            .collect()
    }
}

impl<T> Array2D<T> {
    /// Create an array from row-major data
    ///
    /// Returns `None` if the data length does not match the shape.
    pub fn from_data(data: Vec<T>, shape: (usize, usize)) -> Option<Self> {
        if data.len() == shape.0 * shape.1 {
            Some(Self { data, shape })
        } else {
            None
        }
    }
    /// The shape of the array
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }
    /// Is the array empty?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Get an entry
    pub fn get(&self, index0: usize, index1: usize) -> Option<&T> {
        if index0 < self.shape.0 && index1 < self.shape.1 {
            self.data.get(index0 * self.shape.1 + index1)
        } else {
            None
        }
    }
    /// Get a mutable entry
    pub fn get_mut(&mut self, index0: usize, index1: usize) -> Option<&mut T> {
        if index0 < self.shape.0 && index1 < self.shape.1 {
            self.data.get_mut(index0 * self.shape.1 + index1)
        } else {
            None
        }
    }
    /// Get a row
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index < self.shape.0 {
            Some(&self.data[index * self.shape.1..(index + 1) * self.shape.1])
        } else {
            None
        }
    }
    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let ncols = self.shape.1;
        (0..self.shape.0).map(move |i| &self.data[i * ncols..(i + 1) * ncols])
    }
    /// The underlying row-major data
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// The underlying row-major data, mutably
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for Array2D<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.shape.0 && j < self.shape.1, "Index out of range");
        &self.data[i * self.shape.1 + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2D<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.shape.0 && j < self.shape.1, "Index out of range");
        &mut self.data[i * self.shape.1 + j]
    }
}
