use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;

pub mod grid;
pub mod policy;
pub mod report;
pub mod sim;
pub mod tracker;

pub use grid::{Cell, Position, SeatGrid};
pub use policy::{Adjacent, NeighborPolicy, SeatPolicy, Visible};
pub use report::Report;
pub use sim::{stabilize, Simulation};
pub use tracker::AdjacencyTracker;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InconsistentSeatRow(usize, usize), // (element count of current row, expect count of elements in earlier row).
    InvalidSeatChar(char),
    UnrecognizedMode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InconsistentSeatRow(cur_count, expect_count) => write!(
                f,
                "Given row({} elements), expect row which have {} elements.",
                cur_count, expect_count
            ),
            Error::InvalidSeatChar(c) => write!(f, "Invalid character({}) for seat", c),
            Error::UnrecognizedMode(mode) => write!(
                f,
                "{} is not a valid mode, expect one of: adjacent, visible.",
                mode
            ),
        }
    }
}

impl error::Error for Error {}

/// Seat selection simulator.
#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Path of the seat layout, made of '.'(floor) and 'L'(empty seat).
    pub input_path: PathBuf,
    /// How neighbors are counted: adjacent or visible.
    #[arg(short, long, default_value = "adjacent")]
    pub mode: SeatPolicy,
    /// Print the count of occupied seats only, skip the layout.
    #[arg(long)]
    pub count_only: bool,
}

pub fn read_seat_grid<P: AsRef<Path>>(path: P) -> Result<SeatGrid, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::IOError)?;

    SeatGrid::from_lines(lines)
}
