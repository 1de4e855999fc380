pub mod negamax;
pub mod select;
pub mod tt;

pub use negamax::{solve, WIN};
pub use select::{best_columns, pick_move, MoveChoice, Outcome};
pub use tt::{CacheStats, ChainedTT, DEFAULT_CACHE_CAPACITY};
