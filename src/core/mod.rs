mod models;
pub mod grid;
mod consts;
pub mod moves;
pub mod shuffle;
pub mod completion;
pub mod session;

pub use models::{
    Direction, Grid, MoveResult, Outcome, SessionConfig, SessionInput, SessionState,
    SessionSummary, Tile,
};
pub use consts::*;
pub use grid::InvalidGrid;
pub use moves::{direction_toward, target_of, try_move, try_move_toward_cell};
pub use shuffle::{shuffle, shuffle_seeded, unshuffle};
pub use completion::{is_solved, misplaced_tiles};
pub use session::{format_remaining, Session};
