// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Layers of equally sized grids addressed as one.

use std::fmt;

use super::{Bounded, Grid};
use crate::error::GridError;
use crate::location::Location;

type Layer<T> = Box<dyn Grid<Item = T>>;

/// A stack of grids with identical dimensions.
///
/// Reading a location yields a [`CompositeCell`] holding that location in
/// every layer; writing takes one value per layer.
pub struct CompositeGrid<T> {
    num_rows: usize,
    num_columns: usize,
    layers: Vec<Layer<T>>,
}

impl<T> fmt::Debug for CompositeGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeGrid")
            .field("num_rows", &self.num_rows)
            .field("num_columns", &self.num_columns)
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl<T> CompositeGrid<T> {
    pub fn new(layers: Vec<Layer<T>>) -> Result<Self, GridError> {
        let Some(first) = layers.first() else {
            return Err(GridError::NoLayers);
        };
        let expected = first.dimensions();
        if let Some(mismatch) = layers.iter().find(|l| l.dimensions() != expected) {
            return Err(GridError::DimensionMismatch {
                expected,
                found: mismatch.dimensions(),
            });
        }
        Ok(Self {
            num_rows: expected.0,
            num_columns: expected.1,
            layers,
        })
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, index: usize) -> Option<&dyn Grid<Item = T>> {
        self.layers.get(index).map(|l| l.as_ref())
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut (dyn Grid<Item = T> + 'static)> {
        self.layers.get_mut(index).map(|l| l.as_mut())
    }

    pub fn get(&self, location: impl Into<Location>) -> Result<CompositeCell<'_, T>, GridError> {
        let location = self.check_location(location.into())?;
        Ok(self.cell_raw(location))
    }

    /// Write one value per layer. Nothing is written on error.
    pub fn set<I>(&mut self, location: impl Into<Location>, values: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = T>,
    {
        let location = self.check_location(location.into())?;
        let values: Vec<T> = values.into_iter().collect();
        if values.len() != self.layers.len() {
            return Err(GridError::LayerCount {
                expected: self.layers.len(),
                found: values.len(),
            });
        }
        for (layer, value) in self.layers.iter_mut().zip(values) {
            layer.replace_raw(location, value);
        }
        Ok(())
    }

    /// Write a single layer at `location`, returning the previous value.
    pub fn set_layer(
        &mut self,
        location: impl Into<Location>,
        index: usize,
        value: T,
    ) -> Result<T, GridError> {
        let location = self.check_location(location.into())?;
        let layer = self
            .layers
            .get_mut(index)
            .ok_or(GridError::NoSuchLayer(index))?;
        Ok(layer.replace_raw(location, value))
    }

    pub fn row(&self, row: isize) -> Result<impl Iterator<Item = CompositeCell<'_, T>>, GridError> {
        let row = self.check_row(row)?;
        Ok((0..self.num_columns).map(move |c| self.cell_raw(Location::new(row, c as isize))))
    }

    pub fn column(
        &self,
        column: isize,
    ) -> Result<impl Iterator<Item = CompositeCell<'_, T>>, GridError> {
        let column = self.check_column(column)?;
        Ok((0..self.num_rows).map(move |r| self.cell_raw(Location::new(r as isize, column))))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CompositeCell<'_, T>>> {
        (0..self.num_rows).map(move |r| {
            (0..self.num_columns).map(move |c| self.cell_raw(Location::new(r as isize, c as isize)))
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = (Location, CompositeCell<'_, T>)> {
        self.locations().map(move |loc| (loc, self.cell_raw(loc)))
    }

    fn cell_raw(&self, location: Location) -> CompositeCell<'_, T> {
        CompositeCell {
            layers: &self.layers,
            location,
        }
    }
}

impl<T> Bounded for CompositeGrid<T> {
    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn num_columns(&self) -> usize {
        self.num_columns
    }
}

/// One location viewed across every layer of a [`CompositeGrid`].
pub struct CompositeCell<'a, T> {
    layers: &'a [Layer<T>],
    location: Location,
}

impl<'a, T> CompositeCell<'a, T> {
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Value of layer `index` at this location.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.layers.get(index).map(|l| l.get_raw(self.location))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let location = self.location;
        self.layers.iter().map(move |l| l.get_raw(location))
    }
}

impl<T: fmt::Debug> fmt::Debug for CompositeCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
