use crate::chess::Color;
use anchor_lang::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum Piece {
    #[default]
    Empty,
    BlackPawn,
    BlackRook,
    BlackKnight,
    BlackBishop,
    BlackQueen,
    BlackKing,
    WhitePawn,
    WhiteRook,
    WhiteKnight,
    WhiteBishop,
    WhiteQueen,
    WhiteKing,
}

/// Piece type with the color stripped off, for move-rule dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Piece {
    pub fn pawn(color: Color) -> Piece {
        Piece::of(color, PieceKind::Pawn)
    }

    pub fn rook(color: Color) -> Piece {
        Piece::of(color, PieceKind::Rook)
    }

    pub fn knight(color: Color) -> Piece {
        Piece::of(color, PieceKind::Knight)
    }

    pub fn bishop(color: Color) -> Piece {
        Piece::of(color, PieceKind::Bishop)
    }

    pub fn queen(color: Color) -> Piece {
        Piece::of(color, PieceKind::Queen)
    }

    pub fn king(color: Color) -> Piece {
        Piece::of(color, PieceKind::King)
    }

    pub fn of(color: Color, kind: PieceKind) -> Piece {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    pub fn split(self) -> Option<(Color, PieceKind)> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn => Some((Color::White, PieceKind::Pawn)),
            Piece::WhiteRook => Some((Color::White, PieceKind::Rook)),
            Piece::WhiteKnight => Some((Color::White, PieceKind::Knight)),
            Piece::WhiteBishop => Some((Color::White, PieceKind::Bishop)),
            Piece::WhiteQueen => Some((Color::White, PieceKind::Queen)),
            Piece::WhiteKing => Some((Color::White, PieceKind::King)),
            Piece::BlackPawn => Some((Color::Black, PieceKind::Pawn)),
            Piece::BlackRook => Some((Color::Black, PieceKind::Rook)),
            Piece::BlackKnight => Some((Color::Black, PieceKind::Knight)),
            Piece::BlackBishop => Some((Color::Black, PieceKind::Bishop)),
            Piece::BlackQueen => Some((Color::Black, PieceKind::Queen)),
            Piece::BlackKing => Some((Color::Black, PieceKind::King)),
        }
    }

    pub fn color(self) -> Option<Color> {
        self.split().map(|(color, _)| color)
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn is_piece(self) -> bool {
        !self.is_empty()
    }

    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// One-letter board symbol, uppercase for white and lowercase for black.
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::WhitePawn => 'P',
            Piece::WhiteRook => 'R',
            Piece::WhiteKnight => 'N',
            Piece::WhiteBishop => 'B',
            Piece::WhiteQueen => 'Q',
            Piece::WhiteKing => 'K',
            Piece::BlackPawn => 'p',
            Piece::BlackRook => 'r',
            Piece::BlackKnight => 'n',
            Piece::BlackBishop => 'b',
            Piece::BlackQueen => 'q',
            Piece::BlackKing => 'k',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_inverts_of() {
        for color in [Color::White, Color::Black] {
            for kind in [
                PieceKind::Pawn,
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                assert_eq!(Piece::of(color, kind).split(), Some((color, kind)));
            }
        }
        assert_eq!(Piece::Empty.split(), None);
    }

    #[test]
    fn empty_has_no_color() {
        assert_eq!(Piece::Empty.color(), None);
        assert!(!Piece::Empty.is_color(Color::White));
        assert!(Piece::WhiteQueen.is_color(Color::White));
        assert!(!Piece::WhiteQueen.is_color(Color::Black));
    }
}
