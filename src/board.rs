use crate::lines::WinLines;
use crate::types::{Player, COLUMN_CAPACITY, NUM_COLUMNS};

/// Bitboard position for 3×3×3 drop tic-tac-toe.
///
/// `x` and `o` are 27-bit occupancy masks (bit `f` = cell `f`), `heights`
/// holds the stack height of each of the 9 columns (also the next free
/// level), and `plies` counts moves played. The mover is derived from ply
/// parity: X on even plies, O on odd.
///
/// The search mutates a single long-lived `Position` through strictly
/// stack-ordered `do_move`/`undo_move` pairs instead of copying state.
/// Invalid columns passed to the mutators are logic errors and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    x: u32,
    o: u32,
    heights: [u8; 9],
    plies: u8,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0,
            o: 0,
            heights: [0; 9],
            plies: 0,
        }
    }
}

impl Position {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay a sequence of column drops from the empty board.
    /// Returns `None` if any drop is out of range or overfills a column.
    pub fn from_moves(columns: &[u8]) -> Option<Self> {
        let mut pos = Self::new();
        for &col in columns {
            if !pos.is_valid_move(col) {
                return None;
            }
            pos.do_move(col);
        }
        Some(pos)
    }

    #[inline]
    pub fn is_valid_move(&self, column: u8) -> bool {
        column < NUM_COLUMNS && self.heights[column as usize] < COLUMN_CAPACITY
    }

    /// Drop the mover's piece into `column`.
    pub fn do_move(&mut self, column: u8) {
        assert!(self.is_valid_move(column), "invalid move: column {column}");
        let level = self.heights[column as usize];
        let bit = 1u32 << (column + 9 * level);
        let mask = if self.plies % 2 == 0 {
            &mut self.x
        } else {
            &mut self.o
        };
        debug_assert!(*mask & bit == 0);
        *mask |= bit;
        self.heights[column as usize] += 1;
        self.plies += 1;
    }

    /// Undo the most recent move, which must have been in `column`.
    /// Only stack-ordered undo is supported.
    pub fn undo_move(&mut self, column: u8) {
        assert!(column < NUM_COLUMNS, "invalid move: column {column}");
        assert!(
            self.plies > 0 && self.heights[column as usize] > 0,
            "undo with no move in column {column}"
        );
        self.plies -= 1;
        self.heights[column as usize] -= 1;
        let level = self.heights[column as usize];
        let bit = 1u32 << (column + 9 * level);
        let mask = if self.plies % 2 == 0 {
            &mut self.x
        } else {
            &mut self.o
        };
        debug_assert!(*mask & bit != 0);
        *mask &= !bit;
    }

    /// Would dropping into `column` complete a win line for the mover?
    pub fn is_winning_move(&self, column: u8, lines: &WinLines) -> bool {
        assert!(self.is_valid_move(column), "invalid move: column {column}");
        let cell = column + 9 * self.heights[column as usize];
        let (mover, _) = self.perspective_masks();
        let occupied = mover | (1u32 << cell);
        lines.through(cell).iter().any(|&w| occupied & w == w)
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        if self.plies % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    #[inline]
    pub fn plies(&self) -> u8 {
        self.plies
    }

    #[inline]
    pub fn heights(&self) -> [u8; 9] {
        self.heights
    }

    #[inline]
    pub fn height(&self, column: u8) -> u8 {
        self.heights[column as usize]
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.plies == 27
    }

    /// Read-only snapshot for rendering.
    #[inline]
    pub fn occupant(&self, cell: u8) -> Option<Player> {
        let bit = 1u32 << cell;
        if self.x & bit != 0 {
            Some(Player::X)
        } else if self.o & bit != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// (mover mask, opponent mask) for the side to move.
    #[inline]
    pub(crate) fn perspective_masks(&self) -> (u32, u32) {
        if self.plies % 2 == 0 {
            (self.x, self.o)
        } else {
            (self.o, self.x)
        }
    }
}
