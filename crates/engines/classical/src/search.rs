//! Fixed-depth minimax with alpha-beta pruning
//!
//! The searching side is the maximizer and its opponent the minimizer. Leaf
//! scores come from `evaluate` (White's view) turned around to the searching
//! side's view. Every child is searched on its own clone of the board.

use chess_core::{Board, Color, Difficulty, Move, moves_into};

use crate::eval::evaluate;
use crate::ordering::order_moves;

/// Outcome of a root search.
pub struct SearchOutcome {
    /// Best move and its score from the searching side's view
    pub best_move: Option<(Move, i32)>,
    /// Nodes visited, root included
    pub nodes: u64,
}

struct SearchContext {
    engine_side: Color,
    difficulty: Difficulty,
    nodes: u64,
}

impl SearchContext {
    /// Static evaluation seen by the searching side.
    fn leaf(&self, board: &Board) -> i32 {
        self.engine_side.sign() * evaluate(board, self.difficulty)
    }

    fn side_to_move(&self, maximizing: bool) -> Color {
        if maximizing {
            self.engine_side
        } else {
            self.engine_side.other()
        }
    }

    fn ordered_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        moves_into(board, side, &mut moves);
        order_moves(board, &mut moves, self.difficulty);
        moves
    }
}

/// Searches `board` for `side` at the difficulty's fixed depth.
///
/// Ties keep the first move in search order, so repeated calls on the same
/// board return the same move.
pub fn pick_best_move(board: &Board, side: Color, difficulty: Difficulty) -> SearchOutcome {
    let depth = difficulty.search_depth();
    let mut ctx = SearchContext {
        engine_side: side,
        difficulty,
        nodes: 1,
    };

    let moves = ctx.ordered_moves(board, side);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for mv in moves {
        let mut child = board.clone();
        child.relocate(mv);
        let score = minimax(&child, depth.saturating_sub(1), alpha, beta, false, &mut ctx);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    if let Some((mv, score)) = best {
        tracing::debug!(
            %side,
            %difficulty,
            depth,
            nodes = ctx.nodes,
            %mv,
            score,
            "search finished"
        );
    } else {
        tracing::debug!(%side, "no moves at root");
    }

    SearchOutcome {
        best_move: best,
        nodes: ctx.nodes,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// A node whose side has nothing to move is scored like a leaf.
fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return ctx.leaf(board);
    }

    let moves = ctx.ordered_moves(board, ctx.side_to_move(maximizing));
    if moves.is_empty() {
        return ctx.leaf(board);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let mut child = board.clone();
            child.relocate(mv);
            let score = minimax(&child, depth - 1, alpha, beta, false, ctx);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let mut child = board.clone();
            child.relocate(mv);
            let score = minimax(&child, depth - 1, alpha, beta, true, ctx);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
