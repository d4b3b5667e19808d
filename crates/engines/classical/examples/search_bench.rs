//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p classical_engine -- [difficulty] [fen] [side]
//!
//! Without a FEN, every built-in position is searched for Black at the given
//! difficulty (default: expert).

use std::env;
use std::time::{Duration, Instant};

use chess_core::{Board, Color, Difficulty};
use classical_engine::pick_best_move;

const POSITIONS: &[(&str, &str)] = &[
    ("Starting position", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    ("Open centre", "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R"),
    ("Hanging queen", "3r3k/8/8/8/3Q4/8/8/K7"),
    ("Minor pieces", "r3k3/ppp2ppp/2n5/4p3/4P3/5N2/PPP2PPP/R3K3"),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let difficulty: Difficulty = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(Difficulty::Expert);

    if let Some(fen) = args.get(2) {
        let side = match args.get(3).map(String::as_str) {
            Some("white" | "w") => Color::White,
            _ => Color::Black,
        };
        match Board::from_fen(fen) {
            Ok(board) => {
                run_position(fen, &board, side, difficulty);
            }
            Err(e) => eprintln!("Bad FEN {fen:?}: {e}"),
        }
    } else {
        run_all_positions(difficulty);
    }
}

fn run_position(
    label: &str,
    board: &Board,
    side: Color,
    difficulty: Difficulty,
) -> (u64, Duration) {
    let start = Instant::now();
    let outcome = pick_best_move(board, side, difficulty);
    let elapsed = start.elapsed();

    let best = match outcome.best_move {
        Some((mv, score)) => format!("{mv} ({score:+})"),
        None => "none".to_string(),
    };
    println!(
        "{label:.<30} {best:>14} {:>10} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
        outcome.nodes,
        nps(outcome.nodes, elapsed)
    );
    (outcome.nodes, elapsed)
}

fn run_all_positions(difficulty: Difficulty) {
    println!("=== Search Benchmark ({difficulty}, depth {}) ===", difficulty.search_depth());
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in POSITIONS {
        let Ok(board) = Board::from_fen(fen) else {
            eprintln!("Skipping {name}: bad FEN");
            continue;
        };
        let (nodes, elapsed) = run_position(name, &board, Color::Black, difficulty);
        total_nodes += nodes;
        total_time += elapsed;
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
