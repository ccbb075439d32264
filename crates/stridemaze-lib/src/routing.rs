use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::grid::{Coord, Grid};
use crate::input::{parse_maze, MazeDescription};
use crate::path::{explore, SearchStats, SearchTree};
use crate::state::{initial_state, State};

/// How to choose between goal states that share the minimum cost.
///
/// Only affects which equally cheap path is reported, never the cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalTieBreak {
    /// Prefer arriving with the smallest stride.
    #[default]
    LowestStride,
    /// Prefer arriving with the largest stride.
    HighestStride,
}

impl fmt::Display for GoalTieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            GoalTieBreak::LowestStride => "lowest-stride",
            GoalTieBreak::HighestStride => "highest-stride",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: Coord,
    pub goal: Coord,
    pub tie_break: GoalTieBreak,
}

impl RouteRequest {
    /// Request with the default tie-break.
    pub fn new(start: Coord, goal: Coord) -> Self {
        Self {
            start,
            goal,
            tie_break: GoalTieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: GoalTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: State,
    pub goal: State,
    pub cost: u64,
    /// States from start to goal inclusive.
    pub states: Vec<State>,
    pub stats: SearchStats,
}

impl RoutePlan {
    /// The user-visible path: states projected onto their cells.
    pub fn cells(&self) -> Vec<Coord> {
        self.states.iter().map(State::coord).collect()
    }

    /// Number of moves in the route.
    pub fn hop_count(&self) -> usize {
        self.states.len().saturating_sub(1)
    }
}

/// Pick the cheapest settled state on `goal`.
pub fn resolve_goal(
    tree: &SearchTree,
    goal: Coord,
    tie_break: GoalTieBreak,
) -> Option<(State, u64)> {
    tree.states_at(goal).min_by(|(a, a_cost), (b, b_cost)| {
        a_cost.cmp(b_cost).then_with(|| match tie_break {
            GoalTieBreak::LowestStride => a.stride.cmp(&b.stride),
            GoalTieBreak::HighestStride => b.stride.cmp(&a.stride),
        })
    })
}

/// Compute the cheapest route for `request` over `grid`.
pub fn plan_route(grid: &Grid, request: &RouteRequest) -> Result<RoutePlan> {
    let start = request.start;
    if grid.cell(start).is_none() {
        return Err(Error::StartUnavailable { start });
    }
    let start_state =
        initial_state(grid, start).ok_or(Error::StartStrideExhausted { start })?;

    let tree = explore(grid, start_state);
    let (goal_state, cost) = resolve_goal(&tree, request.goal, request.tie_break).ok_or(
        Error::RouteNotFound {
            start,
            goal: request.goal,
        },
    )?;
    let states = tree.path_to(goal_state).ok_or(Error::RouteNotFound {
        start,
        goal: request.goal,
    })?;

    info!(
        cost,
        hops = states.len().saturating_sub(1),
        goal_stride = goal_state.stride,
        "route resolved"
    );

    Ok(RoutePlan {
        start: start_state,
        goal: goal_state,
        cost,
        states,
        stats: tree.stats(),
    })
}

/// Final answer for one maze.
#[derive(Debug, Clone)]
pub enum Outcome {
    Found(RoutePlan),
    NoPath,
}

impl Outcome {
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            Outcome::Found(plan) => Some(plan),
            Outcome::NoPath => None,
        }
    }
}

/// Parse `text` and solve it. Every failure is reported as [`Outcome::NoPath`].
pub fn solve(text: &str, tie_break: GoalTieBreak) -> Outcome {
    match parse_maze(text) {
        Ok(maze) => solve_maze(&maze, tie_break),
        Err(err) => {
            warn!("{err}");
            Outcome::NoPath
        }
    }
}

/// Solve an already parsed maze.
pub fn solve_maze(maze: &MazeDescription, tie_break: GoalTieBreak) -> Outcome {
    let request = RouteRequest::new(maze.start, maze.goal).with_tie_break(tie_break);
    match plan_route(&maze.grid, &request) {
        Ok(plan) => Outcome::Found(plan),
        Err(err @ (Error::StartUnavailable { .. } | Error::StartStrideExhausted { .. })) => {
            warn!("{err}");
            Outcome::NoPath
        }
        Err(err) => {
            info!("{err}");
            Outcome::NoPath
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{corridor, GridBuilder};

    #[test]
    fn start_equal_to_goal_costs_nothing() {
        let grid = corridor(3);
        let plan = plan_route(&grid, &RouteRequest::new(Coord::new(1, 2), Coord::new(1, 2)))
            .expect("route");
        assert_eq!(plan.cost, 0);
        assert_eq!(plan.cells(), vec![Coord::new(1, 2)]);
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn tie_break_selects_stride_among_equal_costs() {
        // Both routes into (1,4) cost 3. The upper one lands on an increment
        // cell and arrives with stride 2, the lower one keeps stride 1.
        let grid = GridBuilder::new(2, 4)
            .cell(1, 1, "E SE", "N")
            .cell(1, 2, "E", "I")
            .cell(2, 2, "E", "N")
            .cell(2, 3, "NE", "N")
            .cell(1, 4, "X", "N")
            .build();
        let request = RouteRequest::new(Coord::new(1, 1), Coord::new(1, 4));

        let lowest = plan_route(&grid, &request).expect("route");
        let highest = plan_route(
            &grid,
            &request.clone().with_tie_break(GoalTieBreak::HighestStride),
        )
        .expect("route");

        assert_eq!(lowest.cost, 3);
        assert_eq!(highest.cost, 3);
        assert_eq!(lowest.goal.stride, 1);
        assert_eq!(highest.goal.stride, 2);
        assert_eq!(
            lowest.cells(),
            vec![
                Coord::new(1, 1),
                Coord::new(2, 2),
                Coord::new(2, 3),
                Coord::new(1, 4)
            ]
        );
        assert_eq!(
            highest.cells(),
            vec![Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 4)]
        );
    }

    #[test]
    fn exhausted_start_stride_fails_even_at_goal() {
        let grid = GridBuilder::new(1, 1).cell(1, 1, "X", "D").build();
        let err = plan_route(&grid, &RouteRequest::new(Coord::new(1, 1), Coord::new(1, 1)))
            .expect_err("no stride");
        assert!(matches!(err, Error::StartStrideExhausted { .. }));
    }

    #[test]
    fn solve_maze_matches_solving_the_text() {
        let text = "1 3 :: 1 1 :: 1 3\n1 1 :: E :: N\n1 2 :: E :: N\n1 3 :: X :: N";
        let maze = parse_maze(text).expect("parses");
        let from_maze = solve_maze(&maze, GoalTieBreak::default());
        let from_text = solve(text, GoalTieBreak::default());

        let (a, b) = (
            from_maze.plan().expect("route"),
            from_text.plan().expect("route"),
        );
        assert_eq!(a.cost, 2);
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.states, b.states);
    }

    #[test]
    fn solve_maps_every_failure_to_no_path() {
        assert!(matches!(
            solve("garbage", GoalTieBreak::default()),
            Outcome::NoPath
        ));
        assert!(matches!(
            solve("2 2 :: 1 1 :: 2 2\n1 2 :: W :: N", GoalTieBreak::default()),
            Outcome::NoPath
        ));
    }
}
