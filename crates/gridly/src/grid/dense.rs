// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row-major grid backed by a `Vec`.

use super::{Bounded, Grid};
use crate::error::GridError;
use crate::location::Location;

/// Grid for content that fills most cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid<T> {
    num_rows: usize,
    num_columns: usize,
    content: Vec<T>,
}

impl<T: Default> DenseGrid<T> {
    /// Grid with every cell set to `T::default()`.
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self::from_fn(num_rows, num_columns, |_| T::default())
    }
}

impl<T: Clone> DenseGrid<T> {
    pub fn filled(num_rows: usize, num_columns: usize, fill: T) -> Self {
        Self {
            num_rows,
            num_columns,
            content: vec![fill; num_rows * num_columns],
        }
    }
}

impl<T> DenseGrid<T> {
    /// Grid whose cells are computed from their location.
    pub fn from_fn(num_rows: usize, num_columns: usize, f: impl FnMut(Location) -> T) -> Self {
        let content = super::Locations::new(num_rows, num_columns)
            .map(f)
            .collect();
        Self {
            num_rows,
            num_columns,
            content,
        }
    }

    /// Wrap existing row-major content.
    pub fn from_vec(num_rows: usize, num_columns: usize, content: Vec<T>) -> Result<Self, GridError> {
        let expected = num_rows * num_columns;
        if content.len() != expected {
            return Err(GridError::ContentLength {
                expected,
                found: content.len(),
            });
        }
        Ok(Self {
            num_rows,
            num_columns,
            content,
        })
    }

    /// Row-major index of a location. Performs no bounds checking.
    pub fn index(&self, location: Location) -> usize {
        (self.num_columns as isize * location.row + location.column) as usize
    }

    /// A whole row as a contiguous slice.
    pub fn row_slice(&self, row: isize) -> Result<&[T], GridError> {
        let row = self.check_row(row)?;
        let start = self.index(Location::new(row, 0));
        Ok(&self.content[start..start + self.num_columns])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.content
    }

    pub fn into_vec(self) -> Vec<T> {
        self.content
    }
}

impl<T> Bounded for DenseGrid<T> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_columns(&self) -> usize {
        self.num_columns
    }
}

impl<T> Grid for DenseGrid<T> {
    type Item = T;

    fn get_raw(&self, location: Location) -> &T {
        &self.content[self.index(location)]
    }

    fn replace_raw(&mut self, location: Location, value: T) -> T {
        let index = self.index(location);
        std::mem::replace(&mut self.content[index], value)
    }
}
