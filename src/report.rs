use std::fmt::Display;

use crate::{grid::SeatGrid, policy::SeatPolicy};

/// Stable seat layout and how it was reached.
#[derive(Debug, Clone)]
pub struct Report {
    grid: SeatGrid,
    policy: SeatPolicy,
    ticks: usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f)?;
        write!(f, "Occupied seats: {}", self.occupied_n())
    }
}

impl Report {
    pub fn new(grid: SeatGrid, policy: SeatPolicy, ticks: usize) -> Self {
        Self {
            grid,
            policy,
            ticks,
        }
    }

    pub fn occupied_n(&self) -> usize {
        self.grid.occupied_n()
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn policy(&self) -> SeatPolicy {
        self.policy
    }

    /// Count of ticks which changed at least one seat.
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}
