//! Common test utilities and fixture helpers.

use std::fs;
use std::path::PathBuf;

use stridemaze_lib::{parse_maze, MazeDescription};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Raw text of a fixture maze.
pub fn fixture_text(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
}

/// Parse a fixture maze that is expected to have a valid header.
#[allow(dead_code)]
pub fn fixture_maze(name: &str) -> MazeDescription {
    parse_maze(&fixture_text(name)).expect("fixture header parses")
}
