use std::process::ExitCode;

use clap::Parser;
use droptac::{
    best_columns, solve, ChainedTT, Outcome, Player, Position, WinLines, DEFAULT_CACHE_CAPACITY,
};

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Exhaustively solve 3x3x3 drop tic-tac-toe positions")]
struct Args {
    /// Columns played so far, comma-separated (e.g. "4,4,0"); empty board
    /// when omitted
    #[arg(long, default_value = "")]
    moves: String,

    /// Transposition cache capacity in entries
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Also score every legal column individually
    #[arg(long, default_value_t = false)]
    per_column: bool,

    /// Print cache occupancy statistics after solving
    #[arg(long, default_value_t = false)]
    cache_stats: bool,
}

fn parse_moves(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|tok| {
            tok.trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid column '{}'", tok.trim()))
        })
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse();

    let moves = match parse_moves(&args.moves) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("[solve] {e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(mut pos) = Position::from_moves(&moves) else {
        eprintln!("[solve] illegal move sequence: {:?}", moves);
        return ExitCode::FAILURE;
    };

    let side = match pos.to_move() {
        Player::X => 1,
        Player::O => 2,
    };
    eprintln!(
        "[solve] plies={} side-to-move=player {side} cache capacity={}",
        pos.plies(),
        args.cache_capacity
    );

    let lines = WinLines::new();
    let mut tt = ChainedTT::with_capacity(args.cache_capacity);

    let value = solve(&mut pos, &lines, &mut tt);
    println!("value={value} outcome={}", Outcome::from_value(value));

    if args.per_column {
        if let Some((best_value, best)) = best_columns(&mut pos, &lines, &mut tt) {
            for column in 0..9u8 {
                if !pos.is_valid_move(column) {
                    continue;
                }
                let v = if pos.is_winning_move(column, &lines) {
                    droptac::solver::WIN
                } else {
                    pos.do_move(column);
                    let v = -solve(&mut pos, &lines, &mut tt);
                    pos.undo_move(column);
                    v
                };
                println!("column {column}: value={v}");
            }
            println!("best value={best_value} columns={best:?}");
        }
    }

    if args.cache_stats {
        let stats = tt.stats();
        eprintln!("[solve] cache capacity:   {}", stats.capacity);
        eprintln!("[solve] cache population: {}", stats.population);
        eprintln!("[solve] bucket size frequencies:");
        for (n, count) in stats.histogram.iter().enumerate() {
            if n < 10 {
                eprintln!("  {n}  entries: {count}");
            } else {
                eprintln!(" 10+ entries: {count}");
            }
        }
    }

    ExitCode::SUCCESS
}
