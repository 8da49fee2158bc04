use crate::core::{
    Direction, Grid, SessionInput, SessionState, Tile, format_remaining, misplaced_tiles,
};
use crate::models::GameRenderState;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use derive_more::{Display, Error};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    #[display("board has no rows")]
    Empty,
    #[display("unknown token {token:?} on row {row}")]
    UnknownToken { token: String, row: usize },
    #[display("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display("board is not a permutation of its tiles with a single gap")]
    InvalidLayout,
}

/// Reads a board written as rows of 1-based tile labels with `.` for the gap:
///
/// ```text
/// 1 2 3
/// 4 . 6
/// 7 5 8
/// ```
pub fn parse_grid(s: &str) -> Result<Grid, GridParseError> {
    let rows: Vec<Vec<&str>> = s
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(GridParseError::Empty);
    }

    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(GridParseError::NotSquare {
                row: i,
                expected: size,
                found: row.len(),
            });
        }
        for &token in row {
            let tile = match token {
                "." => Tile::Empty,
                _ => match token.parse::<usize>() {
                    Ok(label) if label > 0 => Tile::Piece(label - 1),
                    _ => {
                        return Err(GridParseError::UnknownToken {
                            token: token.to_string(),
                            row: i,
                        });
                    }
                },
            };
            cells.push(tile);
        }
    }

    Grid::from_cells(cells).ok_or(GridParseError::InvalidLayout)
}

fn label_width(grid: &Grid) -> usize {
    (grid.len().saturating_sub(1)).max(1).to_string().len()
}

fn tile_text(tile: Tile, width: usize) -> String {
    match tile.label() {
        Some(label) => format!("{:>width$}", label),
        None => format!("{:>width$}", "."),
    }
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let width = label_width(grid);
    let mut result = String::new();
    for row in grid.cells().chunks(grid.size()) {
        let line: Vec<String> = row.iter().map(|&t| tile_text(t, width)).collect();
        result.push_str(&line.join(" "));
        result.push('\n');
    }
    result
}

/// Terminal columns taken by one cell, padding included
pub fn cell_width(grid: &Grid) -> u16 {
    u16::try_from(label_width(grid))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Where the board is drawn inside `area`: centered, clipped to fit
pub fn board_rect(area: Rect, grid: &Grid) -> Rect {
    let side = u16::try_from(grid.size()).unwrap_or(u16::MAX);
    let width = cell_width(grid).saturating_mul(side).min(area.width);
    let height = side.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Maps a terminal position to the grid cell drawn there
pub fn cell_at(board: Rect, grid: &Grid, column: u16, row: u16) -> Option<usize> {
    if column < board.x || row < board.y || column >= board.right() || row >= board.bottom() {
        return None;
    }
    let col = ((column - board.x) / cell_width(grid)) as usize;
    let row = (row - board.y) as usize;
    if col >= grid.size() || row >= grid.size() {
        return None;
    }
    Some(row * grid.size() + col)
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

fn board_lines(grid: &Grid) -> Vec<Line<'static>> {
    let width = label_width(grid);
    grid.cells()
        .chunks(grid.size())
        .enumerate()
        .map(|(row, tiles)| {
            let spans: Vec<Span> = tiles
                .iter()
                .enumerate()
                .map(|(col, &tile)| {
                    let index = row * grid.size() + col;
                    let style = match tile {
                        Tile::Empty => Style::default().fg(Color::DarkGray),
                        _ if grid.is_in_place(index) => Style::default().fg(Color::Green),
                        _ => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    };
                    Span::styled(format!(" {} ", tile_text(tile, width)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Draws the game and returns the rectangle the board occupies, for
/// translating clicks.
pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<Rect, Box<dyn std::error::Error>> {
    let session = state.session;
    let grid = session.grid();
    let mut board = Rect::default();

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Board
        let block = Block::default().borders(Borders::ALL).title("Slide Puzzle");
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);
        board = board_rect(inner, grid);
        f.render_widget(Paragraph::new(board_lines(grid)), board);

        // Status
        let status = format!(
            "{} | Moves: {} | Out of place: {}",
            format_remaining(session.remaining()),
            session.move_count(),
            misplaced_tiles(grid),
        );
        let status_style = if session.remaining() <= Duration::from_secs(3) {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(status_style)
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        // Instructions / outcome
        let (message, style) = match session.state() {
            SessionState::Playing => {
                let mut text =
                    "Arrows/WASD or click a tile to slide it | R restart | Q quit".to_string();
                match (state.last_input, state.last_move_accepted) {
                    (Some(_), false) => text.push_str(" | That tile can't move"),
                    (Some(SessionInput::Move(direction)), true) => {
                        text.push_str(&format!(" | Last: {:?}", direction.opposite()))
                    }
                    _ => {}
                }
                (text, Style::default().fg(Color::Cyan))
            }
            SessionState::Won => (
                "Solved! R to play again, Q to quit".to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            SessionState::Lost => (
                "Time's up! R to try again, Q to quit".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let instruction_paragraph = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(board)
}

pub enum ConsoleInput {
    Session(SessionInput),
    Click { column: u16, row: u16 },
    Restart,
    Quit,
    Timeout,
    Unknown,
}

/// Arrow keys slide the tile on that side of the gap the way the arrow
/// points, so the gap itself travels the opposite way.
fn slide(direction: Direction) -> ConsoleInput {
    ConsoleInput::Session(SessionInput::Move(direction.opposite()))
}

pub fn handle_input(timeout: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if !event::poll(timeout)? {
        return Ok(ConsoleInput::Timeout);
    }
    Ok(match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => slide(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => slide(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => slide(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => slide(Direction::Right),
            _ => ConsoleInput::Unknown,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => ConsoleInput::Click { column, row },
        _ => ConsoleInput::Unknown,
    })
}
