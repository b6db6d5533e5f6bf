// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grid errors.

use thiserror::Error;

use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("location {0} is outside the grid")]
    OutOfBounds(Location),

    #[error("row {0} is outside the grid")]
    RowOutOfBounds(isize),

    #[error("column {0} is outside the grid")]
    ColumnOutOfBounds(isize),

    #[error("grid dimensions {found:?} do not match {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("content has {found} cells, expected {expected}")]
    ContentLength { expected: usize, found: usize },

    #[error("composite grid needs at least one layer")]
    NoLayers,

    #[error("no layer {0}")]
    NoSuchLayer(usize),

    #[error("expected {expected} layer values, got {found}")]
    LayerCount { expected: usize, found: usize },

    #[error("more than one movement given for {0}")]
    DuplicateMovement(Location),

    #[error("no entity at {0}")]
    NoEntity(Location),
}
