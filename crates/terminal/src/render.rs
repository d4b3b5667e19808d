//! Text rendering of the board and the capture trays

use std::fmt::Write;

use chess_core::{Color, GlyphSet, Move, Square};
use game::GameSession;

const FILES: &str = "  a  b  c  d  e  f  g  h";

/// Renders a session as plain text, one line per rank.
pub struct BoardView<'a> {
    session: &'a GameSession,
    glyphs: GlyphSet,
    hints: &'a [Square],
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a GameSession, glyphs: GlyphSet) -> Self {
        Self {
            session,
            glyphs,
            hints: &[],
        }
    }

    /// Mark these squares as reachable.
    pub fn with_hints(mut self, hints: &'a [Square]) -> Self {
        self.hints = hints;
        self
    }

    pub fn render(&self) -> String {
        let last = self.session.history().last().copied();
        let mut out = String::new();

        let _ = writeln!(out, "{FILES}");
        for rank in 0..8u8 {
            let _ = write!(out, "{}", 8 - rank);
            for file in 0..8u8 {
                let Some(sq) = Square::new(file, rank) else {
                    continue;
                };
                let _ = write!(out, " {}", self.render_square(sq, last));
            }
            let _ = writeln!(out, " {}", 8 - rank);
        }
        let _ = writeln!(out, "{FILES}");

        for color in [Color::White, Color::Black] {
            let taken = self.session.captured_symbols(color, self.glyphs);
            if !taken.is_empty() {
                let _ = writeln!(out, "{color} took: {}", taken.join(" "));
            }
        }
        out
    }

    fn render_square(&self, sq: Square, last: Option<Move>) -> String {
        match self.session.board().piece_at(sq) {
            Some(pc) => {
                // sets with one glyph per kind need the owner spelled out
                let owner = match pc.color {
                    Color::Black if !self.glyphs.distinguishes_colors() => '\'',
                    _ => ' ',
                };
                let marker = if self.hints.contains(&sq) { 'x' } else { owner };
                format!("{}{marker}", pc.symbol(self.glyphs))
            }
            None if self.hints.contains(&sq) => "* ".to_string(),
            None if last.is_some_and(|mv| mv.from == sq) => ". ".to_string(),
            None => {
                let light = (sq.file() + sq.rank()) % 2 == 0;
                if light { "  " } else { "::" }.to_string()
            }
        }
    }
}
