//! Command-line configuration.

use crate::core::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, SessionConfig};
use clap::{Args, Parser, Subcommand};
use derive_more::{Display, Error};
use std::path::PathBuf;
use std::time::Duration;

/// Sliding tile puzzle against the clock
#[derive(Parser, Debug)]
#[command(name = "slide_puzzle")]
#[command(version, long_about = None)]
pub struct Cli {
    /// File the log is written to; the terminal belongs to the game
    #[arg(long, global = true, default_value = "exports/puzzle.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play(PlayArgs),

    /// Print a shuffled board without starting a game
    Shuffle {
        #[command(flatten)]
        board: BoardArgs,

        /// Print the board as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Tiles per side
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Seed for the shuffle; drawn at random when absent
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Seconds on the clock
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Write a JSON summary of the finished session here
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        PlayArgs {
            board: BoardArgs {
                size: DEFAULT_BOARD_SIZE,
                seed: None,
            },
            duration: 10.0,
            export: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    #[display("board size {size} is too small, need at least 2")]
    BoardTooSmall { size: usize },
    #[display("board size {size} is too large, at most 16 fits on screen")]
    BoardTooLarge { size: usize },
    #[display("duration must be a positive number of seconds, got {seconds}")]
    InvalidDuration { seconds: f64 },
}

pub fn validate_board_size(size: usize) -> Result<usize, ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::BoardTooSmall { size });
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::BoardTooLarge { size });
    }
    Ok(size)
}

impl TryFrom<&PlayArgs> for SessionConfig {
    type Error = ConfigError;

    fn try_from(args: &PlayArgs) -> Result<Self, Self::Error> {
        let board_size = validate_board_size(args.board.size)?;
        let duration = Duration::try_from_secs_f64(args.duration)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or(ConfigError::InvalidDuration {
                seconds: args.duration,
            })?;
        Ok(SessionConfig {
            board_size,
            duration,
        })
    }
}
