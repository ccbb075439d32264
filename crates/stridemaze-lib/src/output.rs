use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::Coord;
use crate::path::SearchStats;
use crate::routing::{Outcome, RoutePlan};

/// Literal printed when no route exists.
pub const NO_PATH: &str = "NO PATH";

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub cost: u64,
    /// Number of cells on the path, start and goal included.
    pub length: usize,
    pub goal_stride: u64,
    pub path: Vec<Coord>,
    pub stats: SearchStats,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let path = plan.cells();
        Self {
            cost: plan.cost,
            length: path.len(),
            goal_stride: plan.goal.stride,
            path,
            stats: plan.stats,
        }
    }

    /// Render the `<cost> <length>` line followed by one `<row> <col>` line
    /// per cell.
    pub fn render_plain_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{} {}", self.cost, self.length);
        for coord in &self.path {
            let _ = writeln!(buffer, "{} {}", coord.row, coord.col);
        }
        buffer
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeDocument {
    Found(RouteSummary),
    NoPath,
}

/// Render an outcome in the line-oriented solver format.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found(plan) => RouteSummary::from_plan(plan).render_plain_text(),
        Outcome::NoPath => format!("{NO_PATH}\n"),
    }
}

/// Render an outcome as a pretty-printed JSON document.
pub fn render_json(outcome: &Outcome) -> Result<String> {
    let document = match outcome {
        Outcome::Found(plan) => OutcomeDocument::Found(RouteSummary::from_plan(plan)),
        Outcome::NoPath => OutcomeDocument::NoPath,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
