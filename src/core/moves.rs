use crate::core::{Direction, Grid, MoveResult};
use tracing::trace;

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The cell the gap would land on when travelling in `direction`, or `None`
/// when that would leave the board or wrap onto another row.
pub fn target_of(grid: &Grid, direction: Direction) -> Option<usize> {
    let empty = grid.empty_index();
    let size = grid.size();
    let target = match direction {
        Direction::Up => empty.checked_sub(size)?,
        Direction::Down => empty + size,
        Direction::Left => empty.checked_sub(1)?,
        Direction::Right => empty + 1,
    };
    if target >= grid.len() {
        return None;
    }

    let legal = match direction {
        Direction::Left | Direction::Right => grid.row_of(target) == grid.row_of(empty),
        Direction::Up | Direction::Down => grid.row_of(target).abs_diff(grid.row_of(empty)) == 1,
    };
    legal.then_some(target)
}

pub fn try_move(grid: &mut Grid, direction: Direction) -> MoveResult {
    let Some(target) = target_of(grid, direction) else {
        return MoveResult::NoOp;
    };
    trace!(?direction, from = grid.empty_index(), to = target, "slide");
    let empty = grid.empty_index();
    grid.swap(empty, target);
    MoveResult::Moved(direction)
}

/// Which way the gap has to travel to reach `cell`, if `cell` is one of its
/// orthogonal neighbours.
pub fn direction_toward(grid: &Grid, cell: usize) -> Option<Direction> {
    Direction::all()
        .into_iter()
        .find(|&direction| target_of(grid, direction) == Some(cell))
}

pub fn try_move_toward_cell(grid: &mut Grid, cell: usize) -> MoveResult {
    match direction_toward(grid, cell) {
        Some(direction) => try_move(grid, direction),
        None => MoveResult::NoOp,
    }
}
