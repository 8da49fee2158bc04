pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_grid, render_grid_to_string};
use crate::core::{Direction, Grid, MoveResult, Tile, try_move, try_move_toward_cell};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GridTestState {
    pub grid: Grid,
}

impl GridTestState {
    pub fn new(board: &str) -> Self {
        let grid = parse_grid(board).unwrap_or_else(|err| panic!("bad test board: {err}\n{board}"));
        Self { grid }
    }

    pub fn grid_to_string(&self) -> String {
        render_grid_to_string(&self.grid).trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) {
        let result = try_move(&mut self.grid, direction);
        assert_eq!(
            result,
            MoveResult::Moved(direction),
            "expected gap to move {:?} in board\n{}",
            direction,
            self.grid_to_string()
        );
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &direction in directions {
            self.assert_move(direction);
        }
    }

    pub fn assert_noop(&mut self, direction: Direction) {
        let before = self.grid.clone();
        let result = try_move(&mut self.grid, direction);
        assert_eq!(result, MoveResult::NoOp, "expected {:?} to be rejected", direction);
        assert_eq!(self.grid, before);
    }

    pub fn try_click(&mut self, cell: usize) -> MoveResult {
        try_move_toward_cell(&mut self.grid, cell)
    }

    pub fn assert_single_gap(&self) {
        let gaps = self.grid.cells().iter().filter(|&&t| t == Tile::Empty).count();
        assert_eq!(gaps, 1, "board\n{}", self.grid_to_string());
        assert_eq!(self.grid[self.grid.empty_index()], Tile::Empty);
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.grid_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
