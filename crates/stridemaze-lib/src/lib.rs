//! Stride maze library entry points.
//!
//! This crate parses maze descriptions, models the grid, and finds the
//! cheapest route for a traveler whose stride changes with every cell it
//! lands on. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{Error, Result};
pub use grid::{Cell, Coord, Direction, DirectionSet, Effect, Grid};
pub use input::{load_maze, parse_maze, MazeDescription};
pub use output::{render_json, render_text, RouteSummary, NO_PATH};
pub use path::{explore, SearchStats, SearchTree};
pub use routing::{
    plan_route, resolve_goal, solve, solve_maze, GoalTieBreak, Outcome, RoutePlan, RouteRequest,
};
pub use state::{initial_state, successors, State, Successor};
