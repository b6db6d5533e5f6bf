// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simultaneous movement of entities on a grid.
//!
//! Every entity declares where it wants to go; all moves happen in one step.
//! Each entity is classified into a [`Collision`]:
//!
//! - `NonMoving`: not trying to move.
//! - `Free`: moving onto an empty cell.
//! - `Miss`: moving onto a cell whose occupant is itself leaving.
//! - `Wall`: destination is off the grid.
//! - `Solid`: destination holds something that is not a moving entity.
//! - `Entity`: destination holds an entity that stays put.
//! - `SameDesired`: several entities want the same destination.
//!
//! An entity heading for another entity's cell depends on it. Chains are
//! resolved from the far end back; a closed cycle moves as a unit.
//! [`MovementRules::resolve`] then decides each entity's [`Resolution`].

use std::collections::{BTreeMap, HashMap};

use crate::direction::Direction;
use crate::error::GridError;
use crate::grid::Grid;
use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    NonMoving,
    Free,
    Miss,
    Wall,
    Solid,
    Entity,
    SameDesired,
}

impl Collision {
    /// True when the entity may leave its cell.
    pub fn is_moving(self) -> bool {
        matches!(self, Collision::Free | Collision::Miss)
    }
}

/// What happens to an entity once its collision is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Move if the collision allows it, otherwise stay.
    #[default]
    Proceed,
    /// Remove the entity from the grid.
    Die,
}

/// A requested movement: one step in a direction, or an arbitrary offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Direction(Direction),
    Offset(Location),
}

impl Movement {
    pub fn offset(self) -> Location {
        match self {
            Movement::Direction(direction) => direction.offset(),
            Movement::Offset(offset) => offset,
        }
    }
}

impl From<Direction> for Movement {
    fn from(direction: Direction) -> Self {
        Movement::Direction(direction)
    }
}

impl From<Location> for Movement {
    fn from(offset: Location) -> Self {
        Movement::Offset(offset)
    }
}

/// Outcome for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub location: Location,
    pub desired: Location,
    pub collision: Collision,
    pub resolution: Resolution,
}

impl Entity {
    pub fn moves(&self) -> bool {
        self.collision.is_moving() && self.resolution == Resolution::Proceed
    }

    pub fn dies(&self) -> bool {
        self.resolution == Resolution::Die
    }

    /// True when the entity's current cell is free after the step.
    pub fn vacates(&self) -> bool {
        self.moves() || self.dies()
    }

    /// Where the entity ends up, or `None` if it died.
    pub fn final_location(&self) -> Option<Location> {
        if self.dies() {
            None
        } else if self.moves() {
            Some(self.desired)
        } else {
            Some(self.location)
        }
    }
}

/// Grid access and collision policy for [`resolve_movements`].
pub trait MovementRules<T> {
    /// True if `cell` can be moved onto.
    fn is_empty(&self, cell: &T) -> bool;

    /// Value left behind when an entity leaves or dies.
    fn empty(&self) -> T;

    /// Decide the fate of a classified entity. `cell` is its current content.
    fn resolve(&self, entity: &Entity, cell: &T) -> Resolution {
        let _ = (entity, cell);
        Resolution::Proceed
    }
}

/// Rules for grids of `Option<T>`: `None` is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionRules;

impl<T> MovementRules<Option<T>> for OptionRules {
    fn is_empty(&self, cell: &Option<T>) -> bool {
        cell.is_none()
    }

    fn empty(&self) -> Option<T> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    InProgress,
    Done,
}

enum Link {
    Terminal(Collision),
    Follows(usize),
}

enum Tail {
    Terminal(Collision),
    Cycle(usize),
    Resolved,
}

struct Solver<'a, G: Grid, R> {
    grid: &'a G,
    rules: &'a R,
    requests: Vec<(Location, Location)>,
    by_location: HashMap<Location, usize>,
    desired_counts: HashMap<Location, usize>,
    state: Vec<State>,
    outcomes: Vec<Option<Entity>>,
}

impl<'a, G, R> Solver<'a, G, R>
where
    G: Grid,
    R: MovementRules<G::Item>,
{
    fn new(grid: &'a G, rules: &'a R, requests: Vec<(Location, Location)>) -> Self {
        let by_location = requests
            .iter()
            .enumerate()
            .map(|(i, (location, _))| (*location, i))
            .collect();
        let mut desired_counts = HashMap::new();
        for (location, desired) in &requests {
            if location != desired {
                *desired_counts.entry(*desired).or_insert(0) += 1;
            }
        }
        let count = requests.len();
        Self {
            grid,
            rules,
            requests,
            by_location,
            desired_counts,
            state: vec![State::Unvisited; count],
            outcomes: vec![None; count],
        }
    }

    fn link(&self, index: usize) -> Link {
        let (location, desired) = self.requests[index];
        if location == desired {
            return Link::Terminal(Collision::NonMoving);
        }
        if !self.grid.valid(desired) {
            return Link::Terminal(Collision::Wall);
        }
        if self.desired_counts.get(&desired).copied().unwrap_or(0) > 1 {
            return Link::Terminal(Collision::SameDesired);
        }
        if let Some(&target) = self.by_location.get(&desired) {
            return Link::Follows(target);
        }
        if self.rules.is_empty(self.grid.get_raw(desired)) {
            Link::Terminal(Collision::Free)
        } else {
            Link::Terminal(Collision::Solid)
        }
    }

    fn finish(&mut self, index: usize, collision: Collision) {
        let (location, desired) = self.requests[index];
        let mut entity = Entity {
            location,
            desired,
            collision,
            resolution: Resolution::Proceed,
        };
        entity.resolution = self.rules.resolve(&entity, self.grid.get_raw(location));
        self.outcomes[index] = Some(entity);
        self.state[index] = State::Done;
    }

    fn vacates(&self, index: usize) -> bool {
        self.outcomes[index].as_ref().is_some_and(Entity::vacates)
    }

    fn solve_from(&mut self, start: usize) {
        let mut stack = Vec::new();
        let mut current = start;
        let tail = loop {
            self.state[current] = State::InProgress;
            stack.push(current);
            match self.link(current) {
                Link::Terminal(collision) => break Tail::Terminal(collision),
                Link::Follows(next) => match self.state[next] {
                    State::Done => break Tail::Resolved,
                    State::InProgress => break Tail::Cycle(next),
                    State::Unvisited => current = next,
                },
            }
        };

        match tail {
            Tail::Terminal(collision) => {
                if let Some(top) = stack.pop() {
                    self.finish(top, collision);
                }
            }
            Tail::Cycle(entry) => {
                let start_at = stack.iter().position(|&i| i == entry).unwrap_or(0);
                for member in stack.split_off(start_at) {
                    self.finish(member, Collision::Miss);
                }
            }
            Tail::Resolved => {}
        }

        // Everything left on the stack follows the entry above it.
        while let Some(index) = stack.pop() {
            let desired = self.requests[index].1;
            let collision = match self.by_location.get(&desired) {
                Some(&target) if self.vacates(target) => Collision::Miss,
                _ => Collision::Entity,
            };
            self.finish(index, collision);
        }
    }

    fn solve(mut self) -> Vec<Entity> {
        for index in 0..self.requests.len() {
            if self.state[index] == State::Unvisited {
                self.solve_from(index);
            }
        }
        self.outcomes.into_iter().flatten().collect()
    }
}

/// Classify every requested movement without touching the grid.
///
/// Returns one [`Entity`] per request, sorted by starting location.
pub fn plan_movements<G, R, I, M>(
    grid: &G,
    movements: I,
    rules: &R,
) -> Result<Vec<Entity>, GridError>
where
    G: Grid,
    R: MovementRules<G::Item>,
    I: IntoIterator<Item = (Location, M)>,
    M: Into<Movement>,
{
    let mut requests = BTreeMap::new();
    for (location, movement) in movements {
        let location = grid.check_location(location)?;
        if rules.is_empty(grid.get_raw(location)) {
            return Err(GridError::NoEntity(location));
        }
        let desired = location + movement.into().offset();
        if requests.insert(location, desired).is_some() {
            return Err(GridError::DuplicateMovement(location));
        }
    }
    Ok(Solver::new(grid, rules, requests.into_iter().collect()).solve())
}

/// Classify and apply every requested movement.
///
/// Entities that move or die are lifted off the grid first, then movers are
/// placed at their destinations, so swaps and rotations apply cleanly.
pub fn resolve_movements<G, R, I, M>(
    grid: &mut G,
    movements: I,
    rules: &R,
) -> Result<Vec<Entity>, GridError>
where
    G: Grid,
    R: MovementRules<G::Item>,
    I: IntoIterator<Item = (Location, M)>,
    M: Into<Movement>,
{
    let entities = plan_movements(grid, movements, rules)?;

    let mut lifted = Vec::new();
    for entity in entities.iter().filter(|e| e.vacates()) {
        let value = grid.replace_raw(entity.location, rules.empty());
        if entity.moves() {
            lifted.push((entity.desired, value));
        }
    }
    for (destination, value) in lifted {
        grid.replace_raw(destination, value);
    }

    Ok(entities)
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod tests;
