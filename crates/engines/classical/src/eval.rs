//! Difficulty-scaled position evaluation
//!
//! Scores are centipawns from White's point of view. What gets counted
//! depends on the difficulty:
//! - beginner: material only
//! - intermediate: material + piece-square tables for pawns, knights, bishops
//! - expert: all of the above, plus center occupation, mobility,
//!   minor-piece development and a king centralization penalty

use chess_core::{Board, Color, Difficulty, PieceKind, Square, mobility};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

/// Table entries are tenths of a pawn; this turns one entry into centipawns.
const PST_SCALE: i32 = 10;

const CENTER_BONUS: i32 = 30;
const MOBILITY_BONUS: i32 = 5;
const DEVELOPMENT_BONUS: i32 = 20;
/// Per ring of closeness to the middle of the board.
const KING_CENTER_PENALTY: i32 = 10;

// Piece-square tables from White's side, row 0 = the far (Black) edge.
// Black reads them with the rank mirrored.

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5,  5,  5,  5,  5,  5,  5,  5],
    [ 1,  1,  2,  3,  3,  2,  1,  1],
    [ 0,  0,  1,  3,  3,  1,  0,  0],
    [ 0,  0,  0,  2,  2,  0,  0,  0],
    [ 0, -1, -1,  0,  0, -1, -1,  0],
    [ 0,  1,  1, -2, -2,  1,  1,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2,  0,  0,  0,  0, -2, -4],
    [-3,  0,  1,  2,  2,  1,  0, -3],
    [-3,  1,  2,  3,  3,  2,  1, -3],
    [-3,  0,  2,  3,  3,  2,  0, -3],
    [-3,  1,  1,  2,  2,  1,  1, -3],
    [-4, -2,  0,  1,  1,  0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1,  0,  0,  0,  0,  0,  0, -1],
    [-1,  0,  1,  1,  1,  1,  0, -1],
    [-1,  1,  1,  2,  2,  1,  1, -1],
    [-1,  0,  1,  2,  2,  1,  0, -1],
    [-1,  1,  1,  1,  1,  1,  1, -1],
    [-1,  1,  0,  0,  0,  0,  1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

/// Evaluates the board from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = balanced
pub fn evaluate(board: &Board, difficulty: Difficulty) -> i32 {
    let mut score = 0i32;

    for (sq, pc) in board.pieces() {
        let mut v = piece_value(pc.kind);

        if difficulty.uses_positional_tables() {
            // Tables are written for White; Black looks them up mirrored.
            let table_sq = match pc.color {
                Color::White => sq,
                Color::Black => sq.mirrored(),
            };
            v += positional_bonus(pc.kind, table_sq);
        }

        if difficulty.uses_strategic_bonuses() {
            v += strategic_bonus(board, sq, pc.kind);
        }

        score += pc.color.sign() * v;
    }

    score
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Piece-square bonus in centipawns for a piece standing on `sq` as seen by White.
pub fn positional_bonus(kind: PieceKind, sq: Square) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook | PieceKind::Queen | PieceKind::King => return 0,
    };
    table[sq.rank() as usize][sq.file() as usize] * PST_SCALE
}

fn strategic_bonus(board: &Board, sq: Square, kind: PieceKind) -> i32 {
    let mut bonus = 0;

    if sq.is_center() {
        bonus += CENTER_BONUS;
    }

    bonus += mobility(board, sq) as i32 * MOBILITY_BONUS;

    match kind {
        PieceKind::Knight | PieceKind::Bishop => bonus += DEVELOPMENT_BONUS,
        PieceKind::King => bonus -= king_center_penalty(sq),
        _ => {}
    }

    bonus
}

/// Grows by one step per ring as the king walks toward the middle.
fn king_center_penalty(sq: Square) -> i32 {
    (3 - sq.center_ring() as i32) * KING_CENTER_PENALTY
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
