use crate::core::{Grid, Tile};

impl Grid {
    /// The tile that belongs at `index` in the solved layout
    pub fn canonical_tile(&self, index: usize) -> Tile {
        if index + 1 == self.len() {
            Tile::Empty
        } else {
            Tile::Piece(index)
        }
    }

    pub fn is_in_place(&self, index: usize) -> bool {
        self.tile_at(index) == Some(self.canonical_tile(index))
    }
}

pub fn is_solved(grid: &Grid) -> bool {
    for (index, &tile) in grid.cells().iter().enumerate() {
        if tile != grid.canonical_tile(index) {
            return false;
        }
    }
    true
}

/// Number of pieces not sitting on their solved position. The gap is not
/// counted.
pub fn misplaced_tiles(grid: &Grid) -> usize {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|&(index, tile)| *tile != Tile::Empty && *tile != grid.canonical_tile(index))
        .count()
}
