#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod lines;
pub mod board;
pub mod rng;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Position;
pub use crate::lines::WinLines;
pub use crate::rng::rng_for_turn;
pub use crate::solver::{
    best_columns, pick_move, solve, ChainedTT, MoveChoice, Outcome, DEFAULT_CACHE_CAPACITY,
};
pub use crate::types::{cell_index, column_index, column_to_rc, Player};
