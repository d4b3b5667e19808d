use thiserror::Error;

use crate::types::*;

/// Errors raised while reading a FEN placement field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 ranks in placement, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files")]
    FileCount { rank: usize, files: usize },
    #[error("invalid piece character {0:?}")]
    PieceChar(char),
}

/// 8x8 mailbox, row-major with row 0 at the top (Black's side).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            b.put(f, 0, Piece::new(Color::Black, kind));
            b.put(f, 1, Piece::new(Color::Black, PieceKind::Pawn));
            b.put(f, 6, Piece::new(Color::White, PieceKind::Pawn));
            b.put(f, 7, Piece::new(Color::White, kind));
        }
        b
    }

    fn put(&mut self, file: u8, rank: u8, pc: Piece) {
        self.squares[rank as usize * 8 + file as usize] = Some(pc);
    }

    /// Reads the placement field of a FEN string; any further fields are ignored.
    /// The first FEN rank ("8") becomes row 0.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let placement = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::RankCount(rows.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for ch in row.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as usize;
                    continue;
                }
                let pc = Piece::from_fen_char(ch).ok_or(BoardError::PieceChar(ch))?;
                if file >= 8 {
                    return Err(BoardError::FileCount {
                        rank,
                        files: file + 1,
                    });
                }
                board.squares[rank * 8 + file] = Some(pc);
                file += 1;
            }
            if file != 8 {
                return Err(BoardError::FileCount { rank, files: file });
            }
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8 {
            if rank > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for file in 0..8 {
                match self.squares[rank * 8 + file] {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Moves whatever stands on `mv.from` to `mv.to`, returning the piece that
    /// was on the destination. No rule checks.
    pub fn relocate(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.squares[mv.from.index()].take();
        std::mem::replace(&mut self.squares[mv.to.index()], moving)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| Some((Square::from_index(i)?, (*pc)?)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces_of(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Colors swapped and ranks mirrored: the same position seen from the other side.
    pub fn color_flipped(&self) -> Board {
        let mut out = Board::empty();
        for (sq, pc) in self.pieces() {
            out.set_piece(sq.mirrored(), Some(Piece::new(pc.color.other(), pc.kind)));
        }
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
