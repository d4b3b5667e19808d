//! Display glyph sets for pieces.
//!
//! Front ends pick one set and map every `(kind, color)` through it. The
//! emoji sets use the same glyph for both colors and leave color to styling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Color, ParseError, Piece, PieceKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Classic,
    Modern,
    Medieval,
    Fantasy,
    Geometric,
    Animals,
}

// Order: Pawn, Knight, Bishop, Rook, Queen, King
const CLASSIC_WHITE: [&str; 6] = ["♙", "♘", "♗", "♖", "♕", "♔"];
const CLASSIC_BLACK: [&str; 6] = ["♟", "♞", "♝", "♜", "♛", "♚"];
const MODERN_WHITE: [&str; 6] = ["P", "N", "B", "R", "Q", "K"];
const MODERN_BLACK: [&str; 6] = ["p", "n", "b", "r", "q", "k"];
const MEDIEVAL: [&str; 6] = ["🛡", "🐎", "⛪", "🏰", "👸", "🤴"];
const FANTASY: [&str; 6] = ["🧝", "🦄", "🔮", "🗼", "🧚", "🧙"];
const GEOMETRIC_WHITE: [&str; 6] = ["○", "⬠", "△", "□", "◇", "☆"];
const GEOMETRIC_BLACK: [&str; 6] = ["●", "⬟", "▲", "■", "◆", "★"];
const ANIMALS: [&str; 6] = ["🐭", "🐴", "🦉", "🐘", "🐯", "🦁"];

impl GlyphSet {
    pub const ALL: [GlyphSet; 6] = [
        GlyphSet::Classic,
        GlyphSet::Modern,
        GlyphSet::Medieval,
        GlyphSet::Fantasy,
        GlyphSet::Geometric,
        GlyphSet::Animals,
    ];

    pub fn symbol(self, kind: PieceKind, color: Color) -> &'static str {
        let table = match (self, color) {
            (GlyphSet::Classic, Color::White) => &CLASSIC_WHITE,
            (GlyphSet::Classic, Color::Black) => &CLASSIC_BLACK,
            (GlyphSet::Modern, Color::White) => &MODERN_WHITE,
            (GlyphSet::Modern, Color::Black) => &MODERN_BLACK,
            (GlyphSet::Medieval, _) => &MEDIEVAL,
            (GlyphSet::Fantasy, _) => &FANTASY,
            (GlyphSet::Geometric, Color::White) => &GEOMETRIC_WHITE,
            (GlyphSet::Geometric, Color::Black) => &GEOMETRIC_BLACK,
            (GlyphSet::Animals, _) => &ANIMALS,
        };
        table[kind.idx()]
    }

    /// Whether the set alone tells the two colors apart.
    pub fn distinguishes_colors(self) -> bool {
        matches!(
            self,
            GlyphSet::Classic | GlyphSet::Modern | GlyphSet::Geometric
        )
    }
}

/// Glyph for a piece in the given set.
pub fn piece_symbol(set: GlyphSet, kind: PieceKind, color: Color) -> &'static str {
    set.symbol(kind, color)
}

impl Piece {
    pub fn symbol(self, set: GlyphSet) -> &'static str {
        set.symbol(self.kind, self.color)
    }
}

impl fmt::Display for GlyphSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlyphSet::Classic => "classic",
            GlyphSet::Modern => "modern",
            GlyphSet::Medieval => "medieval",
            GlyphSet::Fantasy => "fantasy",
            GlyphSet::Geometric => "geometric",
            GlyphSet::Animals => "animals",
        };
        f.write_str(name)
    }
}

impl FromStr for GlyphSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlyphSet::ALL
            .into_iter()
            .find(|set| set.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::GlyphSet(s.to_string()))
    }
}
