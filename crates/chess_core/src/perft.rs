use crate::{board::Board, movegen::moves_into, types::*};

/// Pure perft node count over the reduced rule set.
/// Counts all pseudo-legal move sequences of length `depth` for `side` to move.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        moves_into(board, side, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = board.clone();
            child.relocate(mv);
            nodes += inner(&child, side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
