//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the reduced rule set
//! (no check, kings can be captured). Difficulty picks the depth and which
//! evaluation terms are counted.

mod eval;
mod ordering;
mod search;

use chess_core::{Board, Color, Difficulty, Engine, Move, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning at a fixed depth
/// - Capture-first, center-next move ordering
/// - Material, piece-square and strategic evaluation gated by difficulty
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, side: Color, difficulty: Difficulty) -> SearchResult {
        let outcome = search::pick_best_move(board, side, difficulty);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: difficulty.search_depth(),
            nodes: outcome.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// The engine's move for Black, the side it plays against a human.
pub fn best_move(board: &Board, difficulty: Difficulty) -> Option<Move> {
    best_move_for(board, Color::Black, difficulty)
}

/// The engine's move for either side.
pub fn best_move_for(board: &Board, side: Color, difficulty: Difficulty) -> Option<Move> {
    search::pick_best_move(board, side, difficulty)
        .best_move
        .map(|(mv, _)| mv)
}

// Re-export for direct use if needed
pub use eval::{evaluate, piece_value, positional_bonus};
pub use ordering::{move_priority, order_moves};
pub use search::{SearchOutcome, pick_best_move};
