use std::time::Duration;

pub const DEFAULT_BOARD_SIZE: usize = 3;
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);
pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 16;

/// Skip cells that would immediately undo the previous shuffle step
pub const SHUFFLE_AVOID_BACKTRACK: bool = true;
