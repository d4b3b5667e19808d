//! Move ordering for alpha-beta
//!
//! Captures of valuable pieces first, then (above beginner) moves into the
//! center. Ordering only changes how much gets pruned, never the result.

use chess_core::{Board, Difficulty, Move};

use crate::eval::piece_value;

const CENTER_PRIORITY: i32 = 2;

/// Score a move for ordering. Higher = searched first.
///
/// A capture is worth ten times the victim's value in pawns.
pub fn move_priority(board: &Board, mv: Move, difficulty: Difficulty) -> i32 {
    let mut priority = 0;

    if let Some(victim) = board.piece_at(mv.to) {
        priority += 10 * piece_value(victim.kind) / 100;
    }

    if difficulty != Difficulty::Beginner && mv.to.is_center() {
        priority += CENTER_PRIORITY;
    }

    priority
}

/// Sort moves best-first. The sort is stable, so equal priorities keep
/// generation order and the search stays deterministic.
pub fn order_moves(board: &Board, moves: &mut [Move], difficulty: Difficulty) {
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(move_priority(board, mv, difficulty)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Square, moves_for};

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn capture_priority_scales_with_victim() {
        let b = Board::from_fen("8/8/3q1p2/8/4N3/8/8/8").unwrap();
        assert_eq!(move_priority(&b, mv("e4d6"), Difficulty::Beginner), 90);
        assert_eq!(move_priority(&b, mv("e4f6"), Difficulty::Beginner), 10);
        assert_eq!(move_priority(&b, mv("e4c3"), Difficulty::Beginner), 0);
    }

    #[test]
    fn center_bonus_only_above_beginner() {
        let b = Board::startpos();
        assert_eq!(move_priority(&b, mv("e2e4"), Difficulty::Beginner), 0);
        assert_eq!(move_priority(&b, mv("e2e4"), Difficulty::Intermediate), 2);
        assert_eq!(move_priority(&b, mv("e2e3"), Difficulty::Expert), 0);
    }

    #[test]
    fn ordering_is_stable_and_best_first() {
        let b = Board::from_fen("8/8/3q1p2/8/4N3/8/8/8").unwrap();
        let mut moves = moves_for(&b, Color::White);
        let generated = moves.clone();
        order_moves(&b, &mut moves, Difficulty::Beginner);

        assert_eq!(moves[0], mv("e4d6"));
        assert_eq!(moves[1], mv("e4f6"));
        // the quiet moves keep their generation order
        let quiet: Vec<Move> = generated
            .into_iter()
            .filter(|m| b.piece_at(m.to).is_none())
            .collect();
        assert_eq!(&moves[2..], &quiet[..]);
        assert!(moves.iter().all(|m| m.from == Square::from_algebraic("e4").unwrap()));
    }
}
