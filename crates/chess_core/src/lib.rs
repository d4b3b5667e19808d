pub mod board;
pub mod glyphs;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use glyphs::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all move pickers
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the side to move cannot move)
    pub best_move: Option<Move>,
    /// Score in centipawns from the searching side's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that every engine the game controller can drive implements.
///
/// Searches are synchronous and work on a borrowed board; callers that want
/// them off the interaction thread move the engine onto a worker.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// # Arguments
    /// * `board` - The current board, never mutated
    /// * `side` - The color the engine plays
    /// * `difficulty` - Controls depth and evaluation terms
    fn search(&mut self, board: &Board, side: Color, difficulty: Difficulty) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
