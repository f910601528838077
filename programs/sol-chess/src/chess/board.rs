use crate::chess::{Color, Piece, Square};
use anchor_lang::prelude::*;
use std::fmt;

/// 8x8 piece grid indexed `[rank][file]`, rank 0 at the top holding black's
/// back rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct Board {
    pub squares: [[Piece; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[Piece::Empty; 8]; 8],
        }
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.rank as usize][square.file as usize]
    }

    pub fn set_piece(&mut self, piece: Piece, square: Square) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    pub fn clear(&mut self, square: Square) {
        self.set_piece(Piece::Empty, square);
    }

    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.piece_at(from);
        self.clear(from);
        self.set_piece(piece, to);
    }

    pub fn find_piece(&self, piece: Piece) -> Option<Square> {
        Square::all().find(|square| self.piece_at(*square) == piece)
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.find_piece(Piece::king(color))
    }

    /// First occupied square along a direction, with the piece sitting on it.
    pub fn first_piece_along(
        &self,
        from: Square,
        rank_step: i8,
        file_step: i8,
    ) -> Option<(Piece, Square)> {
        from.ray(rank_step, file_step)
            .map(|square| (self.piece_at(square), square))
            .find(|(piece, _)| piece.is_piece())
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// `to` must lie on the ray or the whole ray is scanned.
    pub fn path_clear(&self, from: Square, to: Square, rank_step: i8, file_step: i8) -> bool {
        from.ray(rank_step, file_step)
            .take_while(|square| *square != to)
            .all(|square| self.piece_at(square).is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        const BLACK_BACK: [Piece; 8] = [
            Piece::BlackRook,
            Piece::BlackKnight,
            Piece::BlackBishop,
            Piece::BlackQueen,
            Piece::BlackKing,
            Piece::BlackBishop,
            Piece::BlackKnight,
            Piece::BlackRook,
        ];
        const WHITE_BACK: [Piece; 8] = [
            Piece::WhiteRook,
            Piece::WhiteKnight,
            Piece::WhiteBishop,
            Piece::WhiteQueen,
            Piece::WhiteKing,
            Piece::WhiteBishop,
            Piece::WhiteKnight,
            Piece::WhiteRook,
        ];
        Board {
            squares: [
                BLACK_BACK,
                [Piece::BlackPawn; 8],
                [Piece::Empty; 8],
                [Piece::Empty; 8],
                [Piece::Empty; 8],
                [Piece::Empty; 8],
                [Piece::WhitePawn; 8],
                WHITE_BACK,
            ],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for piece in row {
                write!(f, " {}", piece.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
