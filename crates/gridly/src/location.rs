// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locations in a row-column space.
//!
//! `+row` is down and `+column` is right. Locations are unbounded; whether a
//! location lies inside a particular grid is decided by [`crate::Bounded`].

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::direction::Direction;

/// A `(row, column)` position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: isize,
    pub column: isize,
}

/// One entry of [`Location::each_at`]: a single direction or a path of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Direction(Direction),
    Path(Vec<Direction>),
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        Step::Direction(direction)
    }
}

impl From<Vec<Direction>> for Step {
    fn from(path: Vec<Direction>) -> Self {
        Step::Path(path)
    }
}

impl From<&[Direction]> for Step {
    fn from(path: &[Direction]) -> Self {
        Step::Path(path.to_vec())
    }
}

impl Location {
    pub const fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn above(self, distance: isize) -> Self {
        Self::new(self.row - distance, self.column)
    }

    pub fn below(self, distance: isize) -> Self {
        Self::new(self.row + distance, self.column)
    }

    pub fn left(self, distance: isize) -> Self {
        Self::new(self.row, self.column - distance)
    }

    pub fn right(self, distance: isize) -> Self {
        Self::new(self.row, self.column + distance)
    }

    /// The location `distance` steps away in `direction`.
    pub fn relative(self, direction: Direction, distance: isize) -> Self {
        match direction {
            Direction::Up => self.above(distance),
            Direction::Down => self.below(distance),
            Direction::Left => self.left(distance),
            Direction::Right => self.right(distance),
        }
    }

    /// Follow each direction in sequence, one step each.
    pub fn path<I>(self, directions: I) -> Self
    where
        I: IntoIterator<Item = Direction>,
    {
        directions
            .into_iter()
            .fold(self, |loc, direction| loc.relative(direction, 1))
    }

    /// Resolve each step against this location.
    pub fn each_at<I, S>(self, steps: I) -> impl Iterator<Item = Location>
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        steps.into_iter().map(move |step| match step.into() {
            Step::Direction(direction) => self.relative(direction, 1),
            Step::Path(path) => self.path(path),
        })
    }

    /// The 4 orthogonal neighbours, in [`Direction::ALL`] order.
    pub fn adjacent(self) -> [Location; 4] {
        Direction::ALL.map(|direction| self.relative(direction, 1))
    }

    /// The 4 diagonal neighbours: up-left, up-right, down-left, down-right.
    pub fn diagonals(self) -> [Location; 4] {
        [
            self.path([Direction::Up, Direction::Left]),
            self.path([Direction::Up, Direction::Right]),
            self.path([Direction::Down, Direction::Left]),
            self.path([Direction::Down, Direction::Right]),
        ]
    }

    /// All 8 neighbours: adjacent first, then diagonals.
    pub fn surrounding(self) -> impl Iterator<Item = Location> {
        self.adjacent().into_iter().chain(self.diagonals())
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, other: Location) -> Location {
        Location::new(self.row + other.row, self.column + other.column)
    }
}

impl Sub for Location {
    type Output = Location;

    fn sub(self, other: Location) -> Location {
        Location::new(self.row - other.row, self.column - other.column)
    }
}

impl Neg for Location {
    type Output = Location;

    fn neg(self) -> Location {
        Location::new(-self.row, -self.column)
    }
}

impl From<(isize, isize)> for Location {
    fn from((row, column): (isize, isize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Location> for (isize, isize) {
    fn from(loc: Location) -> Self {
        (loc.row, loc.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
