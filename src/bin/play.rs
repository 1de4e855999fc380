use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use droptac::{
    pick_move, rng_for_turn, ChainedTT, Player, Position, WinLines, DEFAULT_CACHE_CAPACITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AiSide {
    /// AI never moves (two humans).
    None,
    /// AI plays the first player.
    First,
    /// AI plays the second player.
    Second,
    /// AI plays both sides.
    Both,
}

impl AiSide {
    #[inline]
    fn moves_now(self, to_move: Player) -> bool {
        match self {
            AiSide::None => false,
            AiSide::First => to_move == Player::X,
            AiSide::Second => to_move == Player::O,
            AiSide::Both => true,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Interactive 3x3x3 drop tic-tac-toe against a perfect AI")]
struct Args {
    /// Which side the AI plays
    #[arg(long, value_enum, default_value_t = AiSide::Second)]
    ai: AiSide,

    /// Seed for the AI's tie-breaking RNG (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Transposition cache capacity in entries
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Print cache occupancy statistics when the game ends
    #[arg(long, default_value_t = false)]
    cache_stats: bool,
}

fn piece(pos: &Position, cell: u8) -> char {
    match pos.occupant(cell) {
        Some(Player::X) => 'x',
        Some(Player::O) => 'o',
        None => '.',
    }
}

/// Text rendering: the three layers side by side, bottom layer first.
fn render(pos: &Position) -> String {
    let mut out = String::new();
    let heights = pos.heights();
    let plies = pos.plies();
    out.push_str(&format!(
        "board after {plies} move{} (heights: ",
        if plies == 1 { "" } else { "s" }
    ));
    for (i, h) in heights.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(' ');
        }
        out.push(char::from(b'0' + *h));
    }
    out.push_str(")\n");
    for row in 0..3u8 {
        for level in 0..3u8 {
            if level > 0 {
                out.push_str("  ");
            }
            for col in 0..3u8 {
                if col > 0 {
                    out.push(' ');
                }
                out.push(piece(pos, droptac::cell_index(row, col, level)));
            }
        }
        out.push('\n');
    }
    out
}

/// Read a "row col" pair from stdin, re-prompting on malformed or illegal
/// input. `None` on end of input.
fn read_move(input: &mut impl BufRead, pos: &Position) -> Option<u8> {
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!("end of input!");
                return None;
            }
            Ok(_) => {}
        }
        let mut parts = line.split_whitespace();
        let (Some(r), Some(c)) = (parts.next(), parts.next()) else {
            println!("invalid input!");
            continue;
        };
        let (Ok(r), Ok(c)) = (r.parse::<u8>(), c.parse::<u8>()) else {
            println!("invalid input!");
            continue;
        };
        let Some(column) = droptac::column_index(r, c) else {
            println!("invalid move!");
            continue;
        };
        if !pos.is_valid_move(column) {
            println!("invalid move!");
            continue;
        }
        return Some(column);
    }
}

fn main() {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    eprintln!(
        "[play] ai={:?} seed={seed} cache capacity={}",
        args.ai, args.cache_capacity
    );

    let lines = WinLines::new();
    let mut tt = ChainedTT::with_capacity(args.cache_capacity);
    let mut pos = Position::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print!("{}", render(&pos));
    loop {
        let mover = pos.to_move();
        let column = if args.ai.moves_now(mover) {
            let mut rng = rng_for_turn(seed, pos.plies());
            let Some(choice) = pick_move(&mut pos, &lines, &mut tt, &mut rng) else {
                println!("no move found!");
                break;
            };
            let (r, c) = droptac::column_to_rc(choice.column);
            println!("AI plays {r} {c} ({})", choice.outcome);
            choice.column
        } else {
            let Some(column) = read_move(&mut input, &pos) else {
                break;
            };
            column
        };

        let won = pos.is_winning_move(column, &lines);
        pos.do_move(column);
        print!("{}", render(&pos));
        if won {
            let winner = match pos.to_move().other() {
                Player::X => 1,
                Player::O => 2,
            };
            println!("player {winner} has won!");
            break;
        }
        if pos.is_full() {
            println!("draw!");
            break;
        }
    }

    if args.cache_stats {
        let stats = tt.stats();
        eprintln!("[play] cache capacity:   {}", stats.capacity);
        eprintln!("[play] cache population: {}", stats.population);
        eprintln!("[play] bucket size frequencies:");
        for (n, count) in stats.histogram.iter().enumerate() {
            if n < 10 {
                eprintln!("  {n}  entries: {count}");
            } else {
                eprintln!(" 10+ entries: {count}");
            }
        }
    }
}
