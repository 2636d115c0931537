use std::time::Instant;

use tracing::{debug, info};

use crate::{
    grid::SeatGrid,
    policy::{Adjacent, NeighborPolicy, SeatPolicy, Visible},
    report::Report,
};

/// Two generation buffers driven through ticks of one neighbor policy.
///
/// The buffer at `cur_buf_ind` holds the latest generation and is the source
/// of the next tick, the other one is overwritten as its target. Cached
/// neighbor counts rely on there being exactly two buffers.
pub struct Simulation<P: NeighborPolicy> {
    seat_bufs: [SeatGrid; 2],
    cur_buf_ind: usize,
    policy: P,
    tick_n: usize,
}

impl<P: NeighborPolicy> Simulation<P> {
    pub fn new(grid: SeatGrid, policy: P) -> Self {
        let mut cur_buf = grid;
        let mut spare_buf = cur_buf.clone();
        if let Some(tracker) = policy.tracker() {
            tracker.rebuild(&mut cur_buf);
            tracker.reset(&mut spare_buf);
        }

        Self {
            seat_bufs: [cur_buf, spare_buf],
            cur_buf_ind: 0,
            policy,
            tick_n: 0,
        }
    }

    /// Advances one generation, returns how many seats changed.
    pub fn tick(&mut self) -> usize {
        let (r_buf, w_buf) = Self::rw_buf(&mut self.seat_bufs, self.cur_buf_ind);
        let chg_count = step(&self.policy, r_buf, w_buf);
        if let Some(tracker) = self.policy.tracker() {
            tracker.reset(r_buf);
        }
        self.swap_buf();
        self.tick_n += 1;

        chg_count
    }

    /// Ticks until nothing changes, returns the count of ticks that changed something.
    pub fn run(&mut self) -> usize {
        let mut chg_tick_n = 0;
        loop {
            let chg_count = self.tick();
            debug!(tick = self.tick_n, changed = chg_count, "tick done");
            if chg_count == 0 {
                break;
            }

            chg_tick_n += 1;
        }

        chg_tick_n
    }

    pub fn current(&self) -> &SeatGrid {
        &self.seat_bufs[self.cur_buf_ind]
    }

    pub fn previous(&self) -> &SeatGrid {
        &self.seat_bufs[1 - self.cur_buf_ind]
    }

    pub fn tick_n(&self) -> usize {
        self.tick_n
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_grid(self) -> SeatGrid {
        let [buf0, buf1] = self.seat_bufs;
        if self.cur_buf_ind == 0 {
            buf0
        } else {
            buf1
        }
    }

    fn rw_buf(
        seat_bufs: &mut [SeatGrid; 2],
        cur_buf_ind: usize,
    ) -> (&mut SeatGrid, &mut SeatGrid) {
        let (left, right) = seat_bufs.split_at_mut(1);
        if cur_buf_ind == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        }
    }

    fn swap_buf(&mut self) {
        self.cur_buf_ind = 1 - self.cur_buf_ind;
    }
}

fn step<P: NeighborPolicy>(policy: &P, r_buf: &SeatGrid, w_buf: &mut SeatGrid) -> usize {
    let tracker = policy.tracker();
    let mut chg_count = 0;
    for pos in r_buf.positions() {
        let Some(cell) = r_buf.cell(&pos) else {
            continue;
        };
        // Floor is the same in both buffers.
        if !cell.is_present() {
            continue;
        }

        let occupied_neighbor_n = match tracker {
            Some(tracker) => {
                tracker.carry_forward(r_buf, w_buf, pos);
                tracker.cached(r_buf, pos)
            }
            None => policy.occupied_neighbors(r_buf, pos),
        };
        let occupied = cell.is_occupied();
        let next_occupied = policy.next_occupied(occupied, occupied_neighbor_n);
        if let Some(w_cell) = w_buf.cell_mut(&pos) {
            w_cell.set_occupied(next_occupied);
        }

        if next_occupied != occupied {
            chg_count += 1;
            if let Some(tracker) = tracker {
                tracker.propagate(w_buf, pos, next_occupied);
            }
        }
    }

    chg_count
}

fn run_to_report<P: NeighborPolicy>(
    grid: SeatGrid,
    policy: P,
    seat_policy: SeatPolicy,
) -> Report {
    let start = Instant::now();
    let mut sim = Simulation::new(grid, policy);
    let ticks = sim.run();
    let grid = sim.into_grid();
    info!(
        policy = %seat_policy,
        ticks,
        occupied = grid.occupied_n(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "seat layout stabilized"
    );

    Report::new(grid, seat_policy, ticks)
}

/// Runs the given layout under `policy` until no seat changes.
pub fn stabilize(grid: SeatGrid, policy: SeatPolicy) -> Report {
    match policy {
        SeatPolicy::Adjacent => run_to_report(grid, Adjacent::new(), policy),
        SeatPolicy::Visible => run_to_report(grid, Visible, policy),
    }
}
