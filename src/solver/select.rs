use std::fmt;

use rand::Rng;

use crate::board::Position;
use crate::lines::WinLines;
use crate::types::NUM_COLUMNS;

use super::negamax::{solve, WIN};
use super::tt::ChainedTT;

/// Outcome class of the best available move, with the distance expressed
/// in the mover's own moves (an immediate win is "win in 1").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WinIn(u8),
    LossIn(u8),
    Draw,
}

impl Outcome {
    /// Derive the outcome class from a move value (the negated child value,
    /// or `+27` for an immediate win).
    #[inline]
    pub fn from_value(value: i8) -> Self {
        if value > 0 {
            Outcome::WinIn((1 + (27 - i16::from(value)) / 2) as u8)
        } else if value < 0 {
            Outcome::LossIn((1 + (i16::from(value) + 27) / 2) as u8)
        } else {
            Outcome::Draw
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WinIn(n) => write!(f, "win in {n} move{}", if *n == 1 { "" } else { "s" }),
            Outcome::LossIn(n) => write!(f, "loss in {n} move{}", if *n == 1 { "" } else { "s" }),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// A selected move together with its exact evaluation.
#[derive(Debug, Clone, Copy)]
pub struct MoveChoice {
    pub column: u8,
    pub value: i8,
    pub outcome: Outcome,
}

/// Score every legal column and return the best value with the full set of
/// columns achieving it. `None` when the board is full.
///
/// An immediately winning column scores `+27` without recursing; everything
/// else is the negated solve of the resulting position, evaluated through a
/// do/undo pair on the shared `Position`.
pub fn best_columns(
    pos: &mut Position,
    lines: &WinLines,
    tt: &mut ChainedTT,
) -> Option<(i8, Vec<u8>)> {
    let mut best_value = i8::MIN;
    let mut best: Vec<u8> = Vec::new();
    for column in 0..NUM_COLUMNS {
        if !pos.is_valid_move(column) {
            continue;
        }
        let value = if pos.is_winning_move(column, lines) {
            WIN
        } else {
            pos.do_move(column);
            let v = -solve(pos, lines, tt);
            pos.undo_move(column);
            v
        };
        if value > best_value {
            best_value = value;
            best.clear();
        }
        if value >= best_value {
            best.push(column);
        }
    }
    if best.is_empty() {
        None
    } else {
        Some((best_value, best))
    }
}

/// Pick an optimal column, breaking ties uniformly at random so play does
/// not become repetitive. `None` when the board is full.
pub fn pick_move<R: Rng>(
    pos: &mut Position,
    lines: &WinLines,
    tt: &mut ChainedTT,
    rng: &mut R,
) -> Option<MoveChoice> {
    let (value, best) = best_columns(pos, lines, tt)?;
    let column = best[rng.gen_range(0..best.len())];
    Some(MoveChoice {
        column,
        value,
        outcome: Outcome::from_value(value),
    })
}
