use crate::core::{Grid, Tile};
use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("cells are not a square permutation of the tiles with a single gap")]
pub struct InvalidGrid;

impl Tile {
    /// 1-based label shown to the player, `None` for the gap
    pub fn label(&self) -> Option<usize> {
        match self {
            Tile::Piece(id) => Some(id + 1),
            Tile::Empty => None,
        }
    }
}

impl Grid {
    /// Creates a grid in solved order. The last cell holds the gap.
    /// A size of 0 is treated as the degenerate 1x1 board.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let len = size * size;
        let mut cells: Vec<Tile> = (0..len - 1).map(Tile::Piece).collect();
        cells.push(Tile::Empty);
        Grid {
            size,
            cells,
            empty_index: len - 1,
        }
    }

    /// Builds a grid from row-major cells. Returns `None` unless the cells
    /// form a square permutation of the pieces with exactly one gap.
    pub fn from_cells(cells: Vec<Tile>) -> Option<Self> {
        let len = cells.len();
        let size = (1..=len).find(|s| s * s >= len)?;
        if size * size != len {
            return None;
        }

        let mut seen = vec![false; len];
        let mut empty_index = None;
        for (index, tile) in cells.iter().enumerate() {
            let canonical = match tile {
                Tile::Piece(id) if *id < len - 1 => *id,
                Tile::Piece(_) => return None,
                Tile::Empty => {
                    empty_index = Some(index);
                    len - 1
                }
            };
            if seen[canonical] {
                return None;
            }
            seen[canonical] = true;
        }

        Some(Grid {
            size,
            cells,
            empty_index: empty_index?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn empty_index(&self) -> usize {
        self.empty_index
    }

    pub fn tile_at(&self, index: usize) -> Option<Tile> {
        self.cells.get(index).copied()
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.size
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % self.size
    }

    /// Exchanges two cells, keeping track of the gap. Does not check that
    /// the swap is a legal slide.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
        if self.empty_index == a {
            self.empty_index = b;
        } else if self.empty_index == b {
            self.empty_index = a;
        }
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Tile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl TryFrom<Vec<Tile>> for Grid {
    type Error = InvalidGrid;

    fn try_from(cells: Vec<Tile>) -> Result<Self, Self::Error> {
        Grid::from_cells(cells).ok_or(InvalidGrid)
    }
}

impl From<Grid> for Vec<Tile> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}
