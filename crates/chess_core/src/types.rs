use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// +1 for White, -1 for Black. Scores are kept from White's side.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Rank a pawn of this color starts on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    /// Rank step of a pawn advance. White walks toward rank 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lowercase letter used in FEN placement strings.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        let ch = self.kind.letter();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// A board coordinate. Rank 0 is the top row (Black's back rank).
///
/// Serialized as algebraic text ("e2"), so a deserialized square is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

/// The four central squares (d5, e5, d4, e4).
pub const CENTER: [Square; 4] = [
    Square { file: 3, rank: 3 },
    Square { file: 4, rank: 3 },
    Square { file: 3, rank: 4 },
    Square { file: 4, rank: 4 },
];

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Signed coordinates as received from a pointer or click handler.
    pub fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        if idx < 64 {
            Some(Square {
                file: (idx % 8) as u8,
                rank: (idx / 8) as u8,
            })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Row-major index, 0..63.
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::from_coords(self.file as i32 + df as i32, self.rank as i32 + dr as i32)
    }

    /// Same file, rank flipped top to bottom.
    pub fn mirrored(self) -> Square {
        Square {
            file: self.file,
            rank: 7 - self.rank,
        }
    }

    pub fn is_center(self) -> bool {
        CENTER.contains(&self)
    }

    /// Ring number counted from the middle: 0 for the center four, 3 for the edge.
    pub fn center_ring(self) -> u8 {
        let df = (2 * self.file as i8 - 7).unsigned_abs();
        let dr = (2 * self.rank as i8 - 7).unsigned_abs();
        (df.max(dr) - 1) / 2
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }

    /// Parses "e2"-style notation. Rank '8' maps to row 0.
    pub fn from_algebraic(s: &str) -> Result<Square, ParseError> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(ParseError::Square(s.to_string()));
        }
        Ok(Square {
            file: b[0] - b'a',
            rank: b'8' - b[1],
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'8' - self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl TryFrom<String> for Square {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts "e2e4" or "e2 e4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(ParseError::Move(s.to_string()));
        }
        let from = Square::from_algebraic(&compact[0..2])?;
        let to = Square::from_algebraic(&compact[2..4])?;
        Ok(Move { from, to })
    }
}

/// Engine strength. Controls search depth and which evaluation terms apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    /// Fixed search depth in plies.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Beginner => 2,
            Difficulty::Intermediate => 3,
            Difficulty::Expert => 4,
        }
    }

    pub fn uses_positional_tables(self) -> bool {
        self != Difficulty::Beginner
    }

    pub fn uses_strategic_bonuses(self) -> bool {
        self == Difficulty::Expert
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}

/// Failure to read a square, move or setting from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    Square(String),
    #[error("invalid move: {0:?}")]
    Move(String),
    #[error("unknown difficulty: {0:?} (expected beginner, intermediate or expert)")]
    Difficulty(String),
    #[error("unknown glyph set: {0:?}")]
    GlyphSet(String),
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
