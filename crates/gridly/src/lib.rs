// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-size 2D grids.
//!
//! Locations are `(row, column)` pairs where `+row` is down and `+column` is
//! right. Grids come in three flavours: [`DenseGrid`] (row-major `Vec`),
//! [`SparseGrid`] (hash map over a fill value) and [`CompositeGrid`] (equally
//! sized layers addressed together). [`movement`] resolves simultaneous moves
//! of many entities across a grid.

pub mod direction;
pub mod error;
pub mod grid;
pub mod location;
pub mod movement;

pub use direction::Direction;
pub use error::GridError;
pub use grid::{Bounded, CompositeGrid, DenseGrid, Grid, SparseGrid};
pub use location::{Location, Step};
