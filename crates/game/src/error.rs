use std::path::PathBuf;

use chess_core::{Color, Square};
use thiserror::Error;

/// Why a move request was turned down. Rejections never change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square ({file}, {rank}) is off the board")]
    OffBoard { file: i32, rank: i32 },
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("the piece on {square} belongs to {owner}, but it is {side}'s turn")]
    NotYourPiece {
        square: Square,
        owner: Color,
        side: Color,
    },
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
    #[error("the game is over")]
    GameOver,
    #[error("waiting for the engine to move")]
    EngineTurn,
}

/// Failure to load a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
