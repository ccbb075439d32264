use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Coord;

/// Convenient result alias for the stride maze library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The first line of a maze description could not be understood.
    #[error("malformed maze header: {reason}")]
    MalformedHeader { reason: String },

    /// The start coordinate has no cell record.
    #[error("start cell {start} is not part of the maze")]
    StartUnavailable { start: Coord },

    /// Applying the start cell's effect left no stride to move with.
    #[error("start cell {start} leaves the traveler with no stride")]
    StartStrideExhausted { start: Coord },

    /// Raised when no settled state lies on the goal cell.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: Coord, goal: Coord },

    /// Raised when a maze file could not be read.
    #[error("failed to read maze from {path}: {source}")]
    MazeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is one the solver reports as `NO PATH` rather than
    /// an operational failure.
    pub fn is_no_path(&self) -> bool {
        matches!(
            self,
            Error::MalformedHeader { .. }
                | Error::StartUnavailable { .. }
                | Error::StartStrideExhausted { .. }
                | Error::RouteNotFound { .. }
        )
    }
}
