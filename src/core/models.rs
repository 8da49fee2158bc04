use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A piece, identified by the index it occupies in the solved layout
    Piece(usize),
    Empty,
}

/// Serialized as its row-major cells; reading one back goes through
/// `Grid::from_cells`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct Grid {
    pub(super) size: usize,
    pub(super) cells: Vec<Tile>,
    pub(super) empty_index: usize,
}

/// The direction the empty cell travels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved(Direction),
    NoOp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionInput {
    Cell(usize),
    Move(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub board_size: usize,
    pub duration: Duration,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub board_size: usize,
    pub seed: Option<u64>,
    pub duration_seconds: f64,
    pub remaining_seconds: f64,
    pub move_count: u32,
    pub shuffle_length: usize,
    pub state: SessionState,
    pub cells: Vec<Tile>,
}
