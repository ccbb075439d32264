use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction a move can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in the order they are expanded.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit `(row, col)` displacement. Rows grow southwards.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Short token used in maze descriptions.
    pub const fn token(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned when a token does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction token '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.token() == token)
            .ok_or_else(|| UnknownDirection(token.to_string()))
    }
}

/// Set of directions a cell allows leaving by. An empty set is a dead end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The dead-end set.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the allowed directions in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Stride adjustment applied when a traveler lands on a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Effect {
    Increment,
    Decrement,
    #[default]
    Neutral,
}

impl Effect {
    /// Interpret an effect token. Anything other than `I` or `D` is neutral.
    pub fn from_token(token: &str) -> Self {
        match token {
            "I" => Effect::Increment,
            "D" => Effect::Decrement,
            _ => Effect::Neutral,
        }
    }

    pub const fn delta(self) -> i64 {
        match self {
            Effect::Increment => 1,
            Effect::Decrement => -1,
            Effect::Neutral => 0,
        }
    }
}

/// Movement and effect metadata for a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub moves: DirectionSet,
    pub effect: Effect,
}

impl Cell {
    pub fn new(moves: DirectionSet, effect: Effect) -> Self {
        Self { moves, effect }
    }

    /// Cell with no outgoing moves.
    pub fn dead_end(effect: Effect) -> Self {
        Self::new(DirectionSet::empty(), effect)
    }

    pub fn is_dead_end(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Immutable maze model queried by the search.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: i64,
    cols: i64,
    cells: HashMap<Coord, Cell>,
}

impl Grid {
    /// Create an empty grid with the given dimensions.
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            cells: HashMap::new(),
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (i64, i64) {
        (self.rows, self.cols)
    }

    /// Whether `coord` lies inside `[1, rows] x [1, cols]`.
    pub fn contains(&self, coord: Coord) -> bool {
        (1..=self.rows).contains(&coord.row) && (1..=self.cols).contains(&coord.col)
    }

    /// Record a cell, replacing any earlier record at the same coordinate.
    /// Returns `false` (and stores nothing) when `coord` is out of bounds.
    pub fn insert(&mut self, coord: Coord, cell: Cell) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.cells.insert(coord, cell);
        true
    }

    /// Builder-style [`Grid::insert`] that drops out-of-bounds cells.
    pub fn with_cell(mut self, coord: Coord, cell: Cell) -> Self {
        self.insert(coord, cell);
        self
    }

    /// Lookup the cell record at `coord`, if one was listed.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Number of listed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
