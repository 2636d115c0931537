use std::{fmt::Display, str::FromStr};

use crate::{
    grid::{Direction, Position, SeatGrid},
    tracker::AdjacencyTracker,
    Error,
};

/// Which seats a passenger looks at before sitting down or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatPolicy {
    Adjacent,
    Visible,
}

impl FromStr for SeatPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(SeatPolicy::Adjacent),
            "visible" => Ok(SeatPolicy::Visible),
            other => Err(Error::UnrecognizedMode(other.to_string())),
        }
    }
}

impl Display for SeatPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatPolicy::Adjacent => write!(f, "adjacent"),
            SeatPolicy::Visible => write!(f, "visible"),
        }
    }
}

pub trait NeighborPolicy {
    /// Count of occupied neighbors at or above which an occupied seat is left.
    fn threshold(&self) -> usize;

    fn occupied_neighbors(&self, grid: &SeatGrid, pos: Position) -> usize;

    /// Cached neighbor counts, if this policy keeps any.
    fn tracker(&self) -> Option<&AdjacencyTracker> {
        None
    }

    fn next_occupied(&self, occupied: bool, occupied_neighbor_n: usize) -> bool {
        match occupied {
            false if occupied_neighbor_n == 0 => true,
            true if occupied_neighbor_n >= self.threshold() => false,
            unchanged => unchanged,
        }
    }
}

/// The eight seats around, clipped at the walls.
#[derive(Debug, Default)]
pub struct Adjacent {
    tracker: AdjacencyTracker,
}

impl Adjacent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NeighborPolicy for Adjacent {
    fn threshold(&self) -> usize {
        4
    }

    fn occupied_neighbors(&self, grid: &SeatGrid, pos: Position) -> usize {
        grid.adjacent_occupied_n(pos)
    }

    fn tracker(&self) -> Option<&AdjacencyTracker> {
        Some(&self.tracker)
    }
}

/// The first seat seen in each of the eight directions, floor is looked across.
#[derive(Debug, Default)]
pub struct Visible;

impl Visible {
    fn first_seat(grid: &SeatGrid, pos: Position, dir: Direction) -> Option<Position> {
        let mut cur_pos = pos.along_dir(dir)?;
        while grid.contains(&cur_pos) {
            if grid.cell(&cur_pos).is_some_and(|cell| cell.is_present()) {
                return Some(cur_pos);
            }

            cur_pos = cur_pos.along_dir(dir)?;
        }

        None
    }
}

impl NeighborPolicy for Visible {
    fn threshold(&self) -> usize {
        5
    }

    fn occupied_neighbors(&self, grid: &SeatGrid, pos: Position) -> usize {
        Direction::all()
            .iter()
            .filter_map(|dir| Visible::first_seat(grid, pos, *dir))
            .filter(|p| grid.is_occupied(p))
            .count()
    }
}
