//! Game flow for reduced-rules chess
//!
//! This crate provides:
//! - `GameSession`: the board, whose turn it is, captures and the result
//! - `TurnController`: validates and applies moves, and runs the engine's
//!   reply on a background task
//! - `GameConfig`: mode, difficulty, thinking delay and glyph set, read from TOML
//!
//! Rules are deliberately reduced: there is no check, so a king can walk
//! into attack and be taken. Taking the king wins the game.

mod config;
mod controller;
mod error;
mod session;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use session::*;
