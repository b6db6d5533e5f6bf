// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grid traits and storage implementations.
//!
//! [`Bounded`] answers "is this location inside?" for anything with fixed
//! dimensions. [`Grid`] adds cell storage: implementors supply raw access
//! (`get_raw` / `replace_raw`) and get bounds-checked access plus row, column
//! and cell iteration for free.

mod composite;
mod dense;
mod sparse;

pub use composite::{CompositeCell, CompositeGrid};
pub use dense::DenseGrid;
pub use sparse::SparseGrid;

use crate::error::GridError;
use crate::location::Location;

/// Fixed row/column dimensions.
pub trait Bounded {
    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    fn valid_row(&self, row: isize) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.num_rows())
    }

    fn valid_column(&self, column: isize) -> bool {
        usize::try_from(column).is_ok_and(|c| c < self.num_columns())
    }

    fn valid(&self, location: Location) -> bool {
        self.valid_row(location.row) && self.valid_column(location.column)
    }

    /// Return `location` if it lies inside the grid.
    fn check_location(&self, location: Location) -> Result<Location, GridError> {
        if self.valid(location) {
            Ok(location)
        } else {
            Err(GridError::OutOfBounds(location))
        }
    }

    fn check_row(&self, row: isize) -> Result<isize, GridError> {
        if self.valid_row(row) {
            Ok(row)
        } else {
            Err(GridError::RowOutOfBounds(row))
        }
    }

    fn check_column(&self, column: isize) -> Result<isize, GridError> {
        if self.valid_column(column) {
            Ok(column)
        } else {
            Err(GridError::ColumnOutOfBounds(column))
        }
    }

    /// Every location, row-major.
    fn locations(&self) -> Locations {
        Locations::new(self.num_rows(), self.num_columns())
    }
}

/// Row-major iterator over every location of a grid.
#[derive(Debug, Clone)]
pub struct Locations {
    num_columns: usize,
    next: usize,
    end: usize,
}

impl Locations {
    fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            num_columns,
            next: 0,
            end: num_rows.saturating_mul(num_columns),
        }
    }
}

impl Iterator for Locations {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Location::new(
            (index / self.num_columns) as isize,
            (index % self.num_columns) as isize,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Locations {}

/// Cell storage with bounds-checked access.
pub trait Grid: Bounded {
    type Item;

    /// Read a cell without bounds checking.
    ///
    /// The location must be valid; an invalid one may panic or alias another
    /// cell.
    fn get_raw(&self, location: Location) -> &Self::Item;

    /// Write a cell without bounds checking, returning the previous value.
    fn replace_raw(&mut self, location: Location, value: Self::Item) -> Self::Item;

    fn get(&self, location: impl Into<Location>) -> Result<&Self::Item, GridError>
    where
        Self: Sized,
    {
        let location = self.check_location(location.into())?;
        Ok(self.get_raw(location))
    }

    fn set(&mut self, location: impl Into<Location>, value: Self::Item) -> Result<(), GridError>
    where
        Self: Sized,
    {
        self.replace(location, value).map(drop)
    }

    fn replace(
        &mut self,
        location: impl Into<Location>,
        value: Self::Item,
    ) -> Result<Self::Item, GridError>
    where
        Self: Sized,
    {
        let location = self.check_location(location.into())?;
        Ok(self.replace_raw(location, value))
    }

    /// Cells of one row, left to right.
    fn row(&self, row: isize) -> Result<impl Iterator<Item = &Self::Item>, GridError>
    where
        Self: Sized,
    {
        let row = self.check_row(row)?;
        Ok((0..self.num_columns()).map(move |c| self.get_raw(Location::new(row, c as isize))))
    }

    /// Cells of one column, top to bottom.
    fn column(&self, column: isize) -> Result<impl Iterator<Item = &Self::Item>, GridError>
    where
        Self: Sized,
    {
        let column = self.check_column(column)?;
        Ok((0..self.num_rows()).map(move |r| self.get_raw(Location::new(r as isize, column))))
    }

    fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Self::Item>>
    where
        Self: Sized,
    {
        let columns = self.num_columns();
        (0..self.num_rows()).map(move |r| {
            (0..columns).map(move |c| self.get_raw(Location::new(r as isize, c as isize)))
        })
    }

    fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = &Self::Item>>
    where
        Self: Sized,
    {
        let rows = self.num_rows();
        (0..self.num_columns()).map(move |c| {
            (0..rows).map(move |r| self.get_raw(Location::new(r as isize, c as isize)))
        })
    }

    /// Every `(location, cell)` pair, row-major.
    fn cells(&self) -> impl Iterator<Item = (Location, &Self::Item)>
    where
        Self: Sized,
    {
        self.locations().map(move |loc| (loc, self.get_raw(loc)))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
