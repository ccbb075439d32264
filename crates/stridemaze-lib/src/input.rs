//! Maze description parsing.
//!
//! The first line is `R C :: start_row start_col :: goal_row goal_col`. Every
//! following line describes one cell as `row col :: dirs... :: effect`. The
//! header is parsed strictly; cell lines that cannot be understood are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Coord, Direction, DirectionSet, Effect, Grid};

const SECTION_SEPARATOR: &str = "::";
const DEAD_END_TOKEN: &str = "X";

/// Parsed maze: dimensions, endpoints, and the cell grid.
#[derive(Debug, Clone)]
pub struct MazeDescription {
    pub start: Coord,
    pub goal: Coord,
    pub grid: Grid,
    /// Cell lines that were skipped as malformed or out of bounds.
    pub skipped_lines: usize,
}

impl MazeDescription {
    /// Consume the description, keeping only the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl FromStr for MazeDescription {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_maze(text)
    }
}

/// Parse a maze description from text.
pub fn parse_maze(text: &str) -> Result<MazeDescription> {
    let mut lines = text.trim().lines();
    let header = lines.next().ok_or_else(|| Error::MalformedHeader {
        reason: "input is empty".to_string(),
    })?;
    let (rows, cols, start, goal) = parse_header(header)?;

    let mut grid = Grid::new(rows, cols);
    let mut skipped_lines = 0usize;

    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((coord, cell)) = parse_cell_line(line, line_number) else {
            skipped_lines += 1;
            continue;
        };
        if !grid.insert(coord, cell) {
            debug!(line = line_number, %coord, "skipping cell outside the grid");
            skipped_lines += 1;
        }
    }

    debug!(
        rows,
        cols,
        cells = grid.len(),
        skipped = skipped_lines,
        "parsed maze description"
    );

    Ok(MazeDescription {
        start,
        goal,
        grid,
        skipped_lines,
    })
}

/// Read and parse a maze description from a file.
pub fn load_maze(path: &Path) -> Result<MazeDescription> {
    let text = fs::read_to_string(path).map_err(|source| Error::MazeRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maze(&text)
}

fn parse_header(line: &str) -> Result<(i64, i64, Coord, Coord)> {
    let sections: Vec<&str> = line.split(SECTION_SEPARATOR).map(str::trim).collect();
    if sections.len() < 3 {
        return Err(Error::MalformedHeader {
            reason: format!("expected 3 sections, found {}", sections.len()),
        });
    }

    let malformed = |name: &str, section: &str| Error::MalformedHeader {
        reason: format!("{name} section '{section}' is not two integers"),
    };
    let (rows, cols) =
        parse_pair(sections[0]).ok_or_else(|| malformed("dimension", sections[0]))?;
    let (start_row, start_col) =
        parse_pair(sections[1]).ok_or_else(|| malformed("start", sections[1]))?;
    let (goal_row, goal_col) =
        parse_pair(sections[2]).ok_or_else(|| malformed("goal", sections[2]))?;

    Ok((
        rows,
        cols,
        Coord::new(start_row, start_col),
        Coord::new(goal_row, goal_col),
    ))
}

fn parse_cell_line(line: &str, line_number: usize) -> Option<(Coord, Cell)> {
    let sections: Vec<&str> = line.split(SECTION_SEPARATOR).map(str::trim).collect();
    if sections.len() < 3 {
        debug!(line = line_number, "skipping cell line with too few sections");
        return None;
    }

    let Some((row, col)) = parse_pair(sections[0]) else {
        debug!(
            line = line_number,
            section = sections[0],
            "skipping cell line with unreadable coordinates"
        );
        return None;
    };

    let moves = parse_moves(sections[1], line_number);
    let effect = Effect::from_token(sections[2]);
    Some((Coord::new(row, col), Cell::new(moves, effect)))
}

fn parse_moves(section: &str, line_number: usize) -> DirectionSet {
    section
        .split_whitespace()
        .filter(|token| *token != DEAD_END_TOKEN)
        .filter_map(|token| match token.parse::<Direction>() {
            Ok(direction) => Some(direction),
            Err(err) => {
                debug!(line = line_number, "ignoring {err}");
                None
            }
        })
        .collect()
}

/// Exactly two whitespace-separated integers.
fn parse_pair(section: &str) -> Option<(i64, i64)> {
    let mut tokens = section.split_whitespace();
    let first = tokens.next()?.parse().ok()?;
    let second = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((first, second))
}
