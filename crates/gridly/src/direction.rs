// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The four cardinal directions.

use std::fmt;

use crate::location::Location;

/// One of the four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, counter-clockwise starting from the right.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Unit offset for this direction.
    pub const fn offset(self) -> Location {
        match self {
            Direction::Up => Location::new(-1, 0),
            Direction::Down => Location::new(1, 0),
            Direction::Left => Location::new(0, -1),
            Direction::Right => Location::new(0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn iter() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }
}

impl From<Direction> for Location {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "direction_tests.rs"]
mod tests;
