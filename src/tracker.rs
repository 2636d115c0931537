use crate::grid::{Direction, Position, SeatGrid};

/// Keeps each seat's count of occupied adjacent seats inside the generation
/// buffers, updating it only where a seat flipped.
///
/// A tick reads counts from the source buffer and builds the target's counts
/// as carried source count plus one delta per flipped neighbor. That only adds
/// up if the target starts the tick at zero, so the source is cleared once the
/// tick is done: with two buffers it is the next target but one.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdjacencyTracker;

impl AdjacencyTracker {
    pub fn cached(&self, grid: &SeatGrid, pos: Position) -> usize {
        grid.cell(&pos).map_or(0, |cell| cell.neighbor_count())
    }

    pub fn carry_forward(&self, source: &SeatGrid, target: &mut SeatGrid, pos: Position) {
        let count = self.cached(source, pos);
        if let Some(cell) = target.cell_mut(&pos) {
            cell.add_neighbor_count(count as isize);
        }
    }

    pub fn propagate(&self, target: &mut SeatGrid, pos: Position, became_occupied: bool) {
        let delta = if became_occupied { 1 } else { -1 };
        for dir in Direction::all() {
            let Some(neigh_pos) = pos.along_dir(*dir) else {
                continue;
            };
            if let Some(cell) = target.cell_mut(&neigh_pos).filter(|cell| cell.is_present()) {
                cell.add_neighbor_count(delta);
            }
        }
    }

    pub fn reset(&self, grid: &mut SeatGrid) {
        grid.cells_mut().for_each(|cell| cell.reset_neighbor_count());
    }

    /// Recounts every seat from scratch.
    pub fn rebuild(&self, grid: &mut SeatGrid) {
        let counts = grid
            .positions()
            .map(|pos| (pos, grid.adjacent_occupied_n(pos)))
            .collect::<Vec<_>>();
        self.reset(grid);
        for (pos, count) in counts {
            if let Some(cell) = grid.cell_mut(&pos).filter(|cell| cell.is_present()) {
                cell.add_neighbor_count(count as isize);
            }
        }
    }

    pub fn is_consistent(&self, grid: &SeatGrid) -> bool {
        grid.positions()
            .filter(|pos| grid.cell(pos).is_some_and(|cell| cell.is_present()))
            .all(|pos| self.cached(grid, pos) == grid.adjacent_occupied_n(pos))
    }
}
