/// Number of cells in the 3×3×3 cube.
pub const NUM_CELLS: u8 = 27;
/// Number of drop columns (the 3×3 footprint).
pub const NUM_COLUMNS: u8 = 9;
/// Pieces a single column can hold.
pub const COLUMN_CAPACITY: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The player who moves first.
    X,
    /// The player who moves second.
    O,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Cell indexing helpers.
///
/// A cell is addressed by (row, col, level) with each coordinate in 0..=2,
/// or by a single index `3*row + col + 9*level`. Level 0 is the bottom
/// layer; pieces stack upward. The 9 columns are indexed `3*row + col`.
#[inline]
pub fn cell_index(row: u8, col: u8, level: u8) -> u8 {
    debug_assert!(row < 3 && col < 3 && level < 3);
    3 * row + col + 9 * level
}

#[inline]
pub fn column_index(row: u8, col: u8) -> Option<u8> {
    if row < 3 && col < 3 {
        Some(3 * row + col)
    } else {
        None
    }
}

#[inline]
pub fn column_to_rc(column: u8) -> (u8, u8) {
    debug_assert!(column < NUM_COLUMNS);
    (column / 3, column % 3)
}
