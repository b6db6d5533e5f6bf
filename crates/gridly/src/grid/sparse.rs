// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hash-map backed grid for mostly-empty content.

use std::collections::HashMap;

use super::{Bounded, Grid};
use crate::location::Location;

/// Grid where most cells hold the same fill value.
///
/// Only cells that differ from the fill value are stored. Writing the fill
/// value to a cell removes its entry.
#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    num_rows: usize,
    num_columns: usize,
    fill: T,
    content: HashMap<Location, T>,
}

impl<T: Default> SparseGrid<T> {
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self::with_fill(num_rows, num_columns, T::default())
    }
}

impl<T> SparseGrid<T> {
    pub fn with_fill(num_rows: usize, num_columns: usize, fill: T) -> Self {
        Self {
            num_rows,
            num_columns,
            fill,
            content: HashMap::new(),
        }
    }

    pub fn fill(&self) -> &T {
        &self.fill
    }

    /// Number of cells holding something other than the fill value.
    pub fn occupied(&self) -> usize {
        self.content.len()
    }

    /// Stored (non-fill) cells, in no particular order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Location, &T)> {
        self.content.iter().map(|(loc, value)| (*loc, value))
    }
}

impl<T> Bounded for SparseGrid<T> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_columns(&self) -> usize {
        self.num_columns
    }
}

impl<T: PartialEq + Clone> Grid for SparseGrid<T> {
    type Item = T;

    fn get_raw(&self, location: Location) -> &T {
        self.content.get(&location).unwrap_or(&self.fill)
    }

    fn replace_raw(&mut self, location: Location, value: T) -> T {
        let previous = if value == self.fill {
            self.content.remove(&location)
        } else {
            self.content.insert(location, value)
        };
        previous.unwrap_or_else(|| self.fill.clone())
    }
}
