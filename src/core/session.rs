use crate::core::completion::is_solved;
use crate::core::moves::{try_move, try_move_toward_cell};
use crate::core::shuffle::shuffle;
use crate::core::{
    DEFAULT_BOARD_SIZE, DEFAULT_DURATION, Direction, Grid, MoveResult, Outcome, SessionConfig,
    SessionInput, SessionState, SessionSummary,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            board_size: DEFAULT_BOARD_SIZE,
            duration: DEFAULT_DURATION,
        }
    }
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Playing)
    }
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => SessionState::Won,
            Outcome::Lost => SessionState::Lost,
        }
    }
}

/// One play-through: a shuffled grid, a countdown and a Playing -> Won | Lost
/// lifecycle. Everything after a terminal state is ignored.
pub struct Session {
    config: SessionConfig,
    seed: Option<u64>,
    grid: Grid,
    shuffle_moves: Vec<Direction>,
    state: SessionState,
    remaining: Duration,
    move_count: u32,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Self {
        let mut grid = Grid::new(config.board_size);
        let shuffle_moves = shuffle(&mut grid, rng);
        info!(
            size = grid.size(),
            duration = config.duration.as_secs_f64(),
            shuffle_moves = shuffle_moves.len(),
            "session started"
        );
        Session {
            config,
            seed: None,
            grid,
            shuffle_moves,
            state: SessionState::Playing,
            remaining: config.duration,
            move_count: 0,
        }
    }

    pub fn with_seed(config: SessionConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(config, &mut rng);
        session.seed = Some(seed);
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Directions the gap travelled while shuffling
    pub fn shuffle_moves(&self) -> &[Direction] {
        &self.shuffle_moves
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Playing => None,
            SessionState::Won => Some(Outcome::Won),
            SessionState::Lost => Some(Outcome::Lost),
        }
    }

    /// Advances the countdown. Returns `Some(Outcome::Lost)` exactly once,
    /// on the tick that runs the clock out.
    pub fn tick(&mut self, delta: Duration) -> Option<Outcome> {
        if self.state.is_terminal() {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            return Some(self.finish(Outcome::Lost));
        }
        None
    }

    /// Slides the tile at `cell` into the gap if they are neighbours.
    pub fn input_event(&mut self, cell: usize) -> Option<Outcome> {
        if self.state.is_terminal() {
            return None;
        }
        let result = try_move_toward_cell(&mut self.grid, cell);
        self.after_move(result)
    }

    pub fn input_direction(&mut self, direction: Direction) -> Option<Outcome> {
        if self.state.is_terminal() {
            return None;
        }
        let result = try_move(&mut self.grid, direction);
        self.after_move(result)
    }

    /// One step of the host loop. The clock is checked first; an input that
    /// arrives on the tick the time runs out is dropped.
    pub fn update(&mut self, delta: Duration, input: Option<SessionInput>) -> Option<Outcome> {
        if let Some(outcome) = self.tick(delta) {
            return Some(outcome);
        }
        match input? {
            SessionInput::Cell(cell) => self.input_event(cell),
            SessionInput::Move(direction) => self.input_direction(direction),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            board_size: self.grid.size(),
            seed: self.seed,
            duration_seconds: self.config.duration.as_secs_f64(),
            remaining_seconds: self.remaining.as_secs_f64(),
            move_count: self.move_count,
            shuffle_length: self.shuffle_moves.len(),
            state: self.state,
            cells: self.grid.cells().to_vec(),
        }
    }

    fn after_move(&mut self, result: MoveResult) -> Option<Outcome> {
        let MoveResult::Moved(_) = result else {
            return None;
        };
        self.move_count += 1;
        if is_solved(&self.grid) {
            return Some(self.finish(Outcome::Won));
        }
        None
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.state = outcome.into();
        info!(
            ?outcome,
            moves = self.move_count,
            remaining = self.remaining.as_secs_f64(),
            "session finished"
        );
        debug!(cells = ?self.grid.cells(), "final board");
        outcome
    }
}

/// Formats the countdown the way the timer label shows it
pub fn format_remaining(remaining: Duration) -> String {
    format!("Time: {:.1}", remaining.as_secs_f64())
}
