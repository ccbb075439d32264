//! Search states and their lazily generated successors.
//!
//! A [`State`] is a cell plus the stride the traveler will leave it with.
//! Successors are recomputed from the immutable [`Grid`] every time a state
//! is expanded; nothing about the state graph is stored up front.

use std::fmt;

use serde::Serialize;

use crate::grid::{Coord, Grid};

/// Position plus the stride of the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct State {
    pub row: i64,
    pub col: i64,
    pub stride: u64,
}

impl State {
    pub const fn new(row: i64, col: i64, stride: u64) -> Self {
        Self { row, col, stride }
    }

    pub const fn at(coord: Coord, stride: u64) -> Self {
        Self::new(coord.row, coord.col, stride)
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) stride {}", self.row, self.col, self.stride)
    }
}

/// Edge out of an expanded state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub state: State,
    /// Always the stride of the departing state.
    pub cost: u64,
}

/// Apply an effect delta to a stride, rejecting results below one.
fn adjusted_stride(stride: u64, delta: i64) -> Option<u64> {
    stride.checked_add_signed(delta).filter(|next| *next >= 1)
}

/// Build the state the search starts from.
///
/// The start cell's own effect is applied once to an initial stride of one.
/// Returns `None` when the start cell is unlisted or the stride would drop
/// below one.
pub fn initial_state(grid: &Grid, start: Coord) -> Option<State> {
    let cell = grid.cell(start)?;
    let stride = adjusted_stride(1, cell.effect.delta())?;
    Some(State::at(start, stride))
}

/// Destination of a `stride`-cell move from `from` along `(dr, dc)`.
fn landing(from: Coord, (dr, dc): (i64, i64), stride: u64) -> Option<Coord> {
    let stride = i64::try_from(stride).ok()?;
    let row = from.row.checked_add(dr.checked_mul(stride)?)?;
    let col = from.col.checked_add(dc.checked_mul(stride)?)?;
    Some(Coord::new(row, col))
}

/// Append every valid successor of `state` to `out`.
///
/// `out` is not cleared. Directions are visited in
/// [`Direction::ALL`](crate::grid::Direction::ALL) order.
pub fn expand_into(grid: &Grid, state: State, out: &mut Vec<Successor>) {
    let Some(cell) = grid.cell(state.coord()) else {
        return;
    };

    for direction in cell.moves.iter() {
        let Some(target) = landing(state.coord(), direction.delta(), state.stride) else {
            continue;
        };
        if !grid.contains(target) {
            continue;
        }
        let Some(destination) = grid.cell(target) else {
            continue;
        };
        let Some(next_stride) = adjusted_stride(state.stride, destination.effect.delta()) else {
            continue;
        };

        out.push(Successor {
            state: State::at(target, next_stride),
            cost: state.stride,
        });
    }
}

/// Collect the successors of `state`.
pub fn successors(grid: &Grid, state: State) -> Vec<Successor> {
    let mut out = Vec::with_capacity(8);
    expand_into(grid, state, &mut out);
    out
}
