use crate::chess::Color;
use anchor_lang::prelude::*;

/// Standing draw offers. Offers survive until the opponent accepts by
/// offering back, or until any move is played.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum DrawState {
    Neither,
    White,
    Black,
    Draw,
}

impl DrawState {
    pub fn offered_by(&self, color: Color) -> bool {
        match self {
            DrawState::White => color.is_white(),
            DrawState::Black => color.is_black(),
            _ => false,
        }
    }

    pub fn is_draw(&self) -> bool {
        *self == DrawState::Draw
    }

    pub fn reset(&mut self) {
        *self = DrawState::Neither;
    }

    /// Records an offer from `color`. Matching a standing offer from the
    /// other side settles the draw.
    pub fn register_offer(&mut self, color: Color) {
        if self.offered_by(color.opposite()) {
            *self = DrawState::Draw;
        } else if *self == DrawState::Neither {
            *self = if color.is_white() {
                DrawState::White
            } else {
                DrawState::Black
            };
        }
    }
}
