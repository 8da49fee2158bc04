use crate::core::moves::{direction_toward, try_move};
use crate::core::{Direction, Grid, MoveResult, MIN_BOARD_SIZE, SHUFFLE_AVOID_BACKTRACK};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Scrambles the grid with a random walk of legal slides and returns the
/// directions the gap travelled, in order. Every step is a legal move, so
/// replaying the list backwards with opposite directions solves the grid.
#[instrument(skip_all, fields(size = grid.size()))]
pub fn shuffle<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Vec<Direction> {
    let size = grid.size();
    if size < MIN_BOARD_SIZE {
        debug!("board too small to shuffle");
        return Vec::new();
    }

    let iterations = size * size * size;
    let mut moves = Vec::with_capacity(iterations);
    let mut previous_empty = None;
    let mut attempts = 0usize;

    while moves.len() < iterations {
        attempts += 1;
        let cell = rng.random_range(0..grid.len());
        if SHUFFLE_AVOID_BACKTRACK && previous_empty == Some(cell) {
            continue;
        }
        let Some(direction) = direction_toward(grid, cell) else {
            continue;
        };

        let empty = grid.empty_index();
        if let MoveResult::Moved(direction) = try_move(grid, direction) {
            previous_empty = Some(empty);
            moves.push(direction);
        }
    }

    debug!(moves = moves.len(), attempts, "shuffled");
    moves
}

pub fn shuffle_seeded(grid: &mut Grid, seed: u64) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle(grid, &mut rng)
}

/// Applies the inverse of a recorded shuffle, restoring the grid it started
/// from.
pub fn unshuffle(grid: &mut Grid, moves: &[Direction]) {
    for &direction in moves.iter().rev() {
        try_move(grid, direction.opposite());
    }
}
