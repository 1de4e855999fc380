use crate::board::Position;
use crate::lines::WinLines;
use crate::types::NUM_COLUMNS;

use super::tt::ChainedTT;

/// Value of a position where the mover can win with the next drop.
pub const WIN: i8 = 27;

/// Exact negamax value of `pos` from the mover's perspective.
///
/// Full-width search with memoisation, no pruning: every distinct
/// `(mover mask, opponent mask)` pair is solved once and cached. The
/// position is mutated in place through do/undo pairs and is restored
/// bit-for-bit on return.
///
/// Value encoding: sign is the outcome for the mover, magnitude carries the
/// ply distance to the end under perfect play. An immediate win is `+27`;
/// each extra ply moves the value one step toward 0 (win in 3 = `+25`,
/// loss in 2 = `-26`, …). `0` is an exact draw, which only occurs on a
/// full board.
pub fn solve(pos: &mut Position, lines: &WinLines, tt: &mut ChainedTT) -> i8 {
    let (mover, opponent) = pos.perspective_masks();
    if let Some(value) = tt.lookup(mover, opponent) {
        return value;
    }

    // Board full: draw. Cached like any other result.
    if pos.plies() == 27 {
        tt.insert(mover, opponent, 0);
        return 0;
    }

    // One-ply shortcut: any immediately winning drop settles the position
    // without descending. Recursive calls below benefit from the same check
    // at their own ply.
    for column in 0..NUM_COLUMNS {
        if pos.is_valid_move(column) && pos.is_winning_move(column, lines) {
            tt.insert(mover, opponent, WIN);
            return WIN;
        }
    }

    let mut value = i8::MIN;
    for column in 0..NUM_COLUMNS {
        if pos.is_valid_move(column) {
            pos.do_move(column);
            let v = -solve(pos, lines, tt);
            pos.undo_move(column);
            if v > value {
                value = v;
            }
        }
    }
    // At least one column is legal below ply 27.
    assert!(value != i8::MIN, "no legal move at ply {}", pos.plies());

    // Ply-distance adjustment: a later loss is less bad, a later win is
    // worth less.
    if value < 0 {
        value += 1;
    } else if value > 0 {
        value -= 1;
    }

    tt.insert(mover, opponent, value);
    value
}
