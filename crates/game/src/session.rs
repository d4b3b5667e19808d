//! Game session state

use chess_core::{
    Board, Color, Difficulty, GlyphSet, Move, Piece, PieceKind, Square, has_any_move,
    legal_destinations,
};

use crate::config::GameMode;
use crate::error::MoveError;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Color),
    /// The winner took the opposing king.
    Won(Color),
    /// The side to move had no move at all.
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub accepted: bool,
    /// Piece removed from the destination square
    pub captured: Option<Piece>,
    /// Set when the move ended the game by taking a king
    pub terminal: Option<Color>,
}

impl MoveOutcome {
    pub fn rejected() -> Self {
        Self::default()
    }
}

/// A move that passed validation and was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub mover: Color,
    pub captured: Option<Piece>,
    pub status: GameStatus,
}

impl From<AppliedMove> for MoveOutcome {
    fn from(applied: AppliedMove) -> Self {
        MoveOutcome {
            accepted: true,
            captured: applied.captured,
            terminal: match applied.status {
                GameStatus::Won(winner) => Some(winner),
                _ => None,
            },
        }
    }
}

/// One game from the opening position until a king falls or nobody can move.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
    mode: GameMode,
    difficulty: Difficulty,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_board(Board::startpos(), Color::White, mode, difficulty)
    }

    /// Start from an arbitrary position.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        mode: GameMode,
        difficulty: Difficulty,
    ) -> Self {
        let mut session = Self {
            board,
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            mode,
            difficulty,
            status: GameStatus::AwaitingMove(side_to_move),
            history: Vec::new(),
        };
        session.check_stuck(side_to_move);
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side whose turn it is, or `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Color> {
        match self.status {
            GameStatus::AwaitingMove(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Won(c) => Some(c),
            _ => None,
        }
    }

    /// Pieces taken by `color`, in capture order.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    pub fn captured_symbols(&self, color: Color, glyphs: GlyphSet) -> Vec<&'static str> {
        self.captured_by(color)
            .iter()
            .map(|pc| pc.symbol(glyphs))
            .collect()
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Destinations for the piece on `sq`, for move hints.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        legal_destinations(&self.board, sq)
    }

    /// True when it is Black's turn and the engine plays Black.
    pub fn engine_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsAi && self.side_to_move() == Some(Color::Black)
    }

    /// Validate and play a move, reporting why it was refused.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        let GameStatus::AwaitingMove(side) = self.status else {
            return Err(MoveError::GameOver);
        };
        let pc = self.board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if pc.color != side {
            return Err(MoveError::NotYourPiece {
                square: from,
                owner: pc.color,
                side,
            });
        }
        if !legal_destinations(&self.board, from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let mv = Move::new(from, to);
        let captured = self.board.relocate(mv);
        self.history.push(mv);

        if let Some(victim) = captured {
            match side {
                Color::White => self.captured_by_white.push(victim),
                Color::Black => self.captured_by_black.push(victim),
            }
        }

        if captured.is_some_and(|victim| victim.kind == PieceKind::King) {
            self.status = GameStatus::Won(side);
        } else {
            self.status = GameStatus::AwaitingMove(side.other());
            self.check_stuck(side.other());
        }

        Ok(AppliedMove {
            mv,
            mover: side,
            captured,
            status: self.status,
        })
    }

    /// Play a move; any rejection leaves the session as it was.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.try_move(from, to) {
            Ok(applied) => applied.into(),
            Err(e) => {
                tracing::debug!(%from, %to, error = %e, "move rejected");
                MoveOutcome::rejected()
            }
        }
    }

    /// Like `apply_move`, for raw (x, y) coordinates from a pointer.
    pub fn apply_move_xy(&mut self, from: (i32, i32), to: (i32, i32)) -> MoveOutcome {
        match (
            Square::from_coords(from.0, from.1),
            Square::from_coords(to.0, to.1),
        ) {
            (Some(from), Some(to)) => self.apply_move(from, to),
            (None, _) => {
                let e = MoveError::OffBoard {
                    file: from.0,
                    rank: from.1,
                };
                tracing::debug!(error = %e, "move rejected");
                MoveOutcome::rejected()
            }
            (_, None) => {
                let e = MoveError::OffBoard {
                    file: to.0,
                    rank: to.1,
                };
                tracing::debug!(error = %e, "move rejected");
                MoveOutcome::rejected()
            }
        }
    }

    /// End the game as a draw when the side to move cannot move at all.
    fn check_stuck(&mut self, side: Color) {
        if !has_any_move(&self.board, side) {
            self.declare_draw();
        }
    }

    /// Nobody wins: the side to move had nothing to play.
    pub(crate) fn declare_draw(&mut self) {
        if !self.is_terminal() {
            self.status = GameStatus::Drawn;
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
