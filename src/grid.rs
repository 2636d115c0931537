use std::{fmt::Display, str::FromStr};

use once_cell::sync::Lazy;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: Lazy<[Direction; 8]> = Lazy::new(|| {
            [
                Direction::TopLeft,
                Direction::Top,
                Direction::TopRight,
                Direction::Left,
                Direction::Right,
                Direction::BottomLeft,
                Direction::Bottom,
                Direction::BottomRight,
            ]
        });

        ALL_DIRS.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    // Only underflow is caught here, the grid rejects positions past its far edges.
    pub fn along_dir(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::TopLeft if self.r > 0 && self.c > 0 => {
                Some(Position::new(self.r - 1, self.c - 1))
            }
            Direction::Top if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::TopRight if self.r > 0 => Some(Position::new(self.r - 1, self.c + 1)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::BottomLeft if self.c > 0 => Some(Position::new(self.r + 1, self.c - 1)),
            Direction::Bottom => Some(Position::new(self.r + 1, self.c)),
            Direction::BottomRight => Some(Position::new(self.r + 1, self.c + 1)),
            _ => None,
        }
    }
}

/// One grid location of a generation.
///
/// `present` is fixed at load time. `neighbor_count` is only kept up to date
/// while the grid is driven by the adjacency policy, and may dip below zero
/// mid-tick when a flip reaches a cell before its carried count does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    present: bool,
    occupied: bool,
    neighbor_count: isize,
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Cell::seat()),
            '.' => Ok(Cell::floor()),
            other => Err(Error::InvalidSeatChar(other)),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match (self.present, self.occupied) {
            (false, _) => '.',
            (true, true) => '#',
            (true, false) => 'L',
        };

        write!(f, "{}", c)
    }
}

impl Cell {
    pub fn seat() -> Self {
        Self {
            present: true,
            ..Default::default()
        }
    }

    pub fn floor() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn neighbor_count(&self) -> usize {
        usize::try_from(self.neighbor_count).unwrap_or(0)
    }

    /// Floor never takes a seat, so setting occupancy on it is ignored.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = self.present && occupied;
    }

    pub(crate) fn reset_neighbor_count(&mut self) {
        self.neighbor_count = 0;
    }

    pub(crate) fn add_neighbor_count(&mut self, delta: isize) {
        self.neighbor_count += delta;
    }

    /// Same seat layout and occupancy, cached counts ignored.
    pub fn same_state(&self, other: &Cell) -> bool {
        self.present == other.present && self.occupied == other.occupied
    }
}

/// A single generation of the waiting area, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
}

impl Display for SeatGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.row_n {
            for cell in &self.cells[(r * self.col_n)..((r + 1) * self.col_n)] {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromStr for SeatGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeatGrid::from_lines(s.lines())
    }
}

impl SeatGrid {
    pub fn from_lines<I, S>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SeatGridBuilder::new();
        for line in lines {
            builder.push_row(line.as_ref())?;
        }

        Ok(builder.build())
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.pos_to_ind(pos).map(|ind| &self.cells[ind])
    }

    pub fn cell_mut(&mut self, pos: &Position) -> Option<&mut Cell> {
        self.pos_to_ind(pos).map(|ind| &mut self.cells[ind])
    }

    pub fn is_occupied(&self, pos: &Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_occupied())
    }

    pub fn occupied_n(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let col_n = self.col_n;
        (0..self.row_n).flat_map(move |r| (0..col_n).map(move |c| Position::new(r, c)))
    }

    /// Grid-adjacent positions of `pos`, clipped at the edges.
    pub fn adjacent_positions(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::all()
            .iter()
            .filter_map(move |dir| pos.along_dir(*dir))
            .filter(move |p| self.contains(p))
    }

    pub fn adjacent_occupied_n(&self, pos: Position) -> usize {
        self.adjacent_positions(pos)
            .filter(|p| self.is_occupied(p))
            .count()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn same_state(&self, other: &SeatGrid) -> bool {
        self.row_n == other.row_n
            && self.col_n == other.col_n
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.same_state(b))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

pub struct SeatGridBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
}

impl Default for SeatGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatGridBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn push_row(&mut self, row_text: &str) -> Result<(), Error> {
        let cell_n = row_text.chars().count();
        let expect_n = *self.col_n.get_or_insert(cell_n);
        if expect_n != cell_n {
            return Err(Error::InconsistentSeatRow(cell_n, expect_n));
        }

        for c in row_text.chars() {
            self.cells.push(Cell::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> SeatGrid {
        SeatGrid {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_marks_seats_and_floor() {
        let grid: SeatGrid = "L.L\n.L.".parse().unwrap();
        assert_eq!(grid.row_n(), 2);
        assert_eq!(grid.col_n(), 3);
        assert!(grid.cell(&Position::new(0, 0)).unwrap().is_present());
        assert!(!grid.cell(&Position::new(0, 1)).unwrap().is_present());
        assert_eq!(grid.occupied_n(), 0);
    }

    #[test]
    fn load_rejects_unknown_char() {
        let err = "L.#".parse::<SeatGrid>().unwrap_err();
        assert!(matches!(err, Error::InvalidSeatChar('#')));
    }

    #[test]
    fn load_rejects_ragged_rows() {
        let err = SeatGrid::from_lines(["L.L", "L."]).unwrap_err();
        assert!(matches!(err, Error::InconsistentSeatRow(2, 3)));
    }

    #[test]
    fn floor_never_takes_a_seat() {
        let mut cell = Cell::floor();
        cell.set_occupied(true);
        assert!(!cell.is_occupied());
    }

    #[test]
    fn render_uses_seat_marks() {
        let mut grid: SeatGrid = "L.\n.L".parse().unwrap();
        grid.cell_mut(&Position::new(1, 1)).unwrap().set_occupied(true);
        assert_eq!(grid.to_string(), "L.\n.#\n");
    }

    #[test]
    fn corner_has_three_adjacent_positions() {
        let grid: SeatGrid = "LLL\nLLL\nLLL".parse().unwrap();
        for pos in [
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(2, 0),
            Position::new(2, 2),
        ] {
            assert_eq!(grid.adjacent_positions(pos).count(), 3);
        }
        assert_eq!(grid.adjacent_positions(Position::new(1, 1)).count(), 8);
    }
}
