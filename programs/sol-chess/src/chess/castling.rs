use crate::chess::{Color, Square};
use anchor_lang::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn kingside(&self, color: Color) -> bool {
        if color.is_white() {
            self.white_kingside
        } else {
            self.black_kingside
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        if color.is_white() {
            self.white_queenside
        } else {
            self.black_queenside
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        if color.is_white() {
            self.white_kingside = false;
            self.white_queenside = false;
        } else {
            self.black_kingside = false;
            self.black_queenside = false;
        }
    }

    /// Drops rights after a move: all of them once the king leaves its start
    /// square, one side when a rook leaves its corner or the corner is captured.
    pub fn update(&mut self, color: Color, from: Square, to: Square) {
        if from == Square::king_start(color) {
            self.revoke_all(color);
            return;
        }
        for square in [from, to] {
            match square {
                Square::A1 => self.white_queenside = false,
                Square::H1 => self.white_kingside = false,
                Square::A8 => self.black_queenside = false,
                Square::H8 => self.black_kingside = false,
                _ => {}
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }
}
