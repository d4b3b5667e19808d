use rayon::prelude::*;

use chess_core::{Board, Color, moves_for, perft};

// Node counts for the reduced rule set. Up to three plies nothing special can
// happen from the start position, so these agree with standard chess.
const START_COUNTS: [(u8, u64); 3] = [(1, 20), (2, 400), (3, 8_902)];

#[test]
fn perft_from_start_position() {
    let board = Board::startpos();
    for (depth, expected) in START_COUNTS {
        let got = perft(&board, Color::White, depth);
        assert_eq!(
            got, expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth, expected, got
        );
    }
}

#[test]
fn perft_is_symmetric_between_colors() {
    // Black's start is White's start mirrored, so counts match.
    let board = Board::startpos();
    assert_eq!(perft(&board, Color::Black, 3), perft(&board, Color::White, 3));
}

#[test]
fn perft_split_sums_to_total() {
    let board = Board::startpos();
    let split: u64 = moves_for(&board, Color::White)
        .par_iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.relocate(mv);
            perft(&child, Color::Black, 2)
        })
        .sum();
    assert_eq!(split, perft(&board, Color::White, 3));
}

#[test]
fn perft_counts_king_captures() {
    // The rook can take the king; the move is generated like any other.
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4R2K").unwrap();
    let moves = moves_for(&board, Color::White);
    assert!(moves.iter().any(|mv| mv.to.to_string() == "e8"));
    assert_eq!(perft(&board, Color::White, 1), moves.len() as u64);
}
