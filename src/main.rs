// Sliding tile puzzle in the terminal.
// Controls: arrows/WASD slide a tile into the gap, or click a tile next to it. R restarts, Q quits.

use clap::Parser;
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use slide_puzzle::config::{BoardArgs, Cli, Command, PlayArgs, validate_board_size};
use slide_puzzle::console_interface::ConsoleInput;
use slide_puzzle::console_interface::{
    cell_at, cleanup_terminal, handle_input, render_game, render_grid_to_string, setup_terminal,
};
use slide_puzzle::core::{Grid, Session, SessionConfig, SessionInput, SessionState, shuffle_seeded};
use slide_puzzle::export::export_summary;
use slide_puzzle::models::GameRenderState;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_interactive(&args),
        Command::Shuffle { board, json } => run_shuffle(&board, json),
    }
}

fn init_tracing(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .init();
    Ok(())
}

fn pick_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

fn run_shuffle(board: &BoardArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let size = validate_board_size(board.size)?;
    let seed = pick_seed(board.seed);
    info!(size, seed, "headless shuffle");

    let mut grid = Grid::new(size);
    let moves = shuffle_seeded(&mut grid, seed);
    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
    } else {
        println!("seed {} ({} moves)", seed, moves.len());
        print!("{}", render_grid_to_string(&grid));
    }
    Ok(())
}

fn new_session(config: SessionConfig, seed: Option<u64>) -> Session {
    let seed = pick_seed(seed);
    info!(seed, "new session");
    Session::with_seed(config, seed)
}

fn run_interactive(args: &PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SessionConfig::try_from(args)?;
    let mut terminal = setup_terminal()?;
    let result = play(&mut terminal, config, args.board.seed);
    cleanup_terminal()?;
    let session = result?;

    if let Some(path) = &args.export {
        export_summary(path, &session.summary())?;
        println!("Session summary exported to {}", path.display());
    }
    match session.state() {
        SessionState::Won => println!("Solved in {} moves.", session.move_count()),
        SessionState::Lost => println!("Out of time after {} moves.", session.move_count()),
        SessionState::Playing => println!("Bye!"),
    }
    Ok(())
}

fn play(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: SessionConfig,
    seed: Option<u64>,
) -> Result<Session, Box<dyn std::error::Error>> {
    let mut session = new_session(config, seed);
    let mut board = render_game(terminal, &GameRenderState::new(&session))?;
    let mut last_frame = Instant::now();

    loop {
        let input = handle_input(POLL_INTERVAL)?;
        let now = Instant::now();
        let delta = now - last_frame;
        last_frame = now;

        let session_input = match input {
            ConsoleInput::Quit => break,
            ConsoleInput::Restart => {
                session = new_session(config, None);
                board = render_game(terminal, &GameRenderState::new(&session))?;
                continue;
            }
            ConsoleInput::Session(input) => Some(input),
            ConsoleInput::Click { column, row } => {
                cell_at(board, session.grid(), column, row).map(SessionInput::Cell)
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => None,
        };

        let moves_before = session.move_count();
        if let Some(outcome) = session.update(delta, session_input) {
            info!(?outcome, "outcome");
        }
        let last_move_accepted =
            session_input.is_none() || session.state().is_terminal() || session.move_count() > moves_before;
        if !last_move_accepted {
            debug!(?session_input, "rejected move");
        }

        board = render_game(
            terminal,
            &GameRenderState {
                session: &session,
                last_input: session_input,
                last_move_accepted,
            },
        )?;
    }

    Ok(session)
}
