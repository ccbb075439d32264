// Test-only helpers for `stridemaze-lib` tests
#![allow(dead_code)]

use crate::grid::{Cell, Coord, Direction, DirectionSet, Effect, Grid};

/// Builder for small grids written with the same tokens as maze files.
pub struct GridBuilder {
    grid: Grid,
}

impl GridBuilder {
    #[must_use]
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            grid: Grid::new(rows, cols),
        }
    }

    /// Add a cell; `moves` is a whitespace-separated direction list.
    pub fn cell(mut self, row: i64, col: i64, moves: &str, effect: &str) -> Self {
        let moves: DirectionSet = moves
            .split_whitespace()
            .filter_map(|token| token.parse::<Direction>().ok())
            .collect();
        self.grid
            .insert(Coord::new(row, col), Cell::new(moves, Effect::from_token(effect)));
        self
    }

    pub fn build(self) -> Grid {
        self.grid
    }
}

/// Single-row grid of `len` neutral cells that only allow moving east.
pub fn corridor(len: i64) -> Grid {
    (1..=len)
        .fold(GridBuilder::new(1, len), |builder, col| {
            builder.cell(1, col, "E", "N")
        })
        .build()
}
