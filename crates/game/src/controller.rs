//! Turn controller
//!
//! Owns the live session and is the only thing that writes to it. When the
//! engine owns the turn, the controller hands out an `EngineJob`: a snapshot of
//! the board plus an engine. The job waits out the thinking delay, searches
//! on a blocking worker, and its reply comes back through
//! `finish_engine_job`. Every reset bumps the generation, so a reply that
//! arrives after a reset is dropped instead of being played on the new game.

use std::time::Duration;

use chess_core::{Board, Color, Difficulty, Engine, SearchResult, Square};
use classical_engine::ClassicalEngine;

use crate::config::GameConfig;
use crate::error::MoveError;
use crate::session::{AppliedMove, GameSession, GameStatus, MoveOutcome};

/// Builds the engine for one job.
pub type EngineFactory = fn() -> Box<dyn Engine>;

fn classical() -> Box<dyn Engine> {
    Box::new(ClassicalEngine::new())
}

/// A pending engine turn, detached from the controller so it can run on a task.
pub struct EngineJob {
    generation: u64,
    board: Board,
    side: Color,
    difficulty: Difficulty,
    delay: Duration,
    engine: Box<dyn Engine>,
}

/// The engine's answer for one job.
#[derive(Debug, Clone)]
pub struct EngineReply {
    pub generation: u64,
    /// `None` if the search worker died before answering
    pub result: Option<SearchResult>,
}

/// What `finish_engine_job` did with a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    /// The engine's move was played
    Played(AppliedMove),
    /// The engine had nothing to play; the game is drawn
    NoMove,
    /// The reply belonged to an earlier game and was dropped
    Stale,
    /// The search failed or produced an unplayable move; still the engine's turn
    Failed,
}

impl EngineJob {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait out the thinking delay, then search on a blocking worker thread.
    pub async fn run(self) -> EngineReply {
        let EngineJob {
            generation,
            board,
            side,
            difficulty,
            delay,
            mut engine,
        } = self;

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let result = tokio::task::spawn_blocking(move || engine.search(&board, side, difficulty))
            .await
            .map_err(|e| tracing::error!(error = %e, "engine worker failed"))
            .ok();

        EngineReply { generation, result }
    }
}

/// Drives one game at a time: human input, engine turns and resets.
pub struct TurnController {
    session: GameSession,
    config: GameConfig,
    generation: u64,
    engine_pending: bool,
    engine_factory: EngineFactory,
}

impl TurnController {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(config, classical)
    }

    /// Use a different engine for the computer side.
    pub fn with_engine(config: GameConfig, engine_factory: EngineFactory) -> Self {
        Self {
            session: GameSession::new(config.mode, config.difficulty),
            config,
            generation: 0,
            engine_pending: false,
            engine_factory,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Incremented by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn engine_pending(&self) -> bool {
        self.engine_pending
    }

    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        self.session.legal_destinations(sq)
    }

    /// Play a move for the human side.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        if self.session.engine_to_move() {
            return Err(MoveError::EngineTurn);
        }
        let applied = self.session.try_move(from, to)?;
        self.log_applied(&applied);
        Ok(applied)
    }

    /// `submit_move` reduced to a plain outcome.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        match self.submit_move(from, to) {
            Ok(applied) => applied.into(),
            Err(e) => {
                tracing::debug!(%from, %to, error = %e, "move rejected");
                MoveOutcome::rejected()
            }
        }
    }

    /// Throw the current game away and start a fresh one.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.engine_pending = false;
        self.session = GameSession::new(self.config.mode, self.config.difficulty);
        tracing::info!(
            generation = self.generation,
            mode = %self.config.mode,
            difficulty = %self.config.difficulty,
            "new game"
        );
    }

    /// Replace the settings and start a new game with them.
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    /// Snapshot the board for an engine turn, if the engine is to move and
    /// no search is already out.
    pub fn take_engine_job(&mut self) -> Option<EngineJob> {
        if !self.session.engine_to_move() || self.engine_pending {
            return None;
        }
        self.engine_pending = true;

        tracing::debug!(generation = self.generation, "engine job scheduled");
        Some(EngineJob {
            generation: self.generation,
            board: self.session.board().clone(),
            side: Color::Black,
            difficulty: self.session.difficulty(),
            delay: self.config.thinking_delay(),
            engine: (self.engine_factory)(),
        })
    }

    /// Feed an engine reply back through the normal move path.
    pub fn finish_engine_job(&mut self, reply: EngineReply) -> EngineOutcome {
        if reply.generation != self.generation {
            tracing::debug!(
                reply = reply.generation,
                current = self.generation,
                "dropping engine reply from an earlier game"
            );
            return EngineOutcome::Stale;
        }
        self.engine_pending = false;

        let Some(result) = reply.result else {
            return EngineOutcome::Failed;
        };

        let Some(mv) = result.best_move else {
            tracing::info!("engine has no move, game drawn");
            self.session.declare_draw();
            return EngineOutcome::NoMove;
        };

        match self.session.try_move(mv.from, mv.to) {
            Ok(applied) => {
                tracing::debug!(nodes = result.nodes, score = result.score, "engine search stats");
                self.log_applied(&applied);
                EngineOutcome::Played(applied)
            }
            Err(e) => {
                tracing::warn!(%mv, error = %e, "engine produced an unplayable move");
                EngineOutcome::Failed
            }
        }
    }

    /// Run a whole engine turn in place. `None` when it is not the engine's turn.
    pub async fn play_engine_turn(&mut self) -> Option<EngineOutcome> {
        let job = self.take_engine_job()?;
        let reply = job.run().await;
        Some(self.finish_engine_job(reply))
    }

    fn log_applied(&self, applied: &AppliedMove) {
        tracing::info!(
            mover = %applied.mover,
            mv = %applied.mv,
            captured = applied.captured.is_some(),
            "move played"
        );
        match applied.status {
            GameStatus::Won(winner) => tracing::info!(%winner, "king captured, game over"),
            GameStatus::Drawn => tracing::info!("no moves left, game drawn"),
            GameStatus::AwaitingMove(_) => {}
        }
    }
}
