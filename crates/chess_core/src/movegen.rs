use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pseudo-legal destinations for the piece on `from`, in generation order.
///
/// An empty square yields an empty list. Nothing is filtered for king
/// safety: under these rules this is the complete move set.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    destinations_into(board, from, &mut out);
    out
}

/// Same as `legal_destinations`, appending to a reusable buffer.
pub fn destinations_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(pc) = board.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &DIAGONALS);
            gen_slider(board, from, pc.color, out, &ORTHOGONALS);
        }
        PieceKind::King => gen_steps(board, from, pc.color, out, &KING_DELTAS),
    }
}

/// Every pseudo-legal move for `side`, squares scanned row-major from the top.
pub fn moves_for(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    moves_into(board, side, &mut out);
    out
}

pub fn moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    let mut dests = Vec::with_capacity(28);
    for (from, _) in board.pieces_of(side) {
        dests.clear();
        destinations_into(board, from, &mut dests);
        out.extend(dests.iter().map(|&to| Move::new(from, to)));
    }
}

pub fn has_any_move(board: &Board, side: Color) -> bool {
    let mut dests = Vec::with_capacity(28);
    board.pieces_of(side).any(|(from, _)| {
        dests.clear();
        destinations_into(board, from, &mut dests);
        !dests.is_empty()
    })
}

/// Number of pseudo-legal destinations for the piece on `from`.
pub fn mobility(board: &Board, from: Square) -> usize {
    let mut dests = Vec::with_capacity(28);
    destinations_into(board, from, &mut dests);
    dests.len()
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1, then 2 from the starting rank
    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.rank() == c.pawn_rank() {
                if let Some(two) = one.offset(0, dir) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    // diagonal captures
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && let Some(tpc) = board.piece_at(to)
            && tpc.color != c
        {
            out.push(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(df, dr);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
