use crate::chess::Color;
use anchor_lang::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum GameState {
    Waiting,
    White,
    Black,
    WhiteWon,
    BlackWon,
    Draw,
}

impl GameState {
    /// Side to move, None unless the game is running.
    pub fn turn(&self) -> Option<Color> {
        match self {
            GameState::White => Some(Color::White),
            GameState::Black => Some(Color::Black),
            _ => None,
        }
    }

    pub fn is_waiting(&self) -> bool {
        *self == GameState::Waiting
    }

    pub fn is_ongoing(&self) -> bool {
        self.turn().is_some()
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self,
            GameState::WhiteWon | GameState::BlackWon | GameState::Draw
        )
    }

    pub fn next(self) -> GameState {
        match self {
            GameState::White => GameState::Black,
            GameState::Black => GameState::White,
            other => other,
        }
    }

    pub fn won_by(color: Color) -> GameState {
        if color.is_white() {
            GameState::WhiteWon
        } else {
            GameState::BlackWon
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Waiting => write!(f, "waiting for players"),
            GameState::White => write!(f, "white to move"),
            GameState::Black => write!(f, "black to move"),
            GameState::WhiteWon => write!(f, "white won"),
            GameState::BlackWon => write!(f, "black won"),
            GameState::Draw => write!(f, "drawn"),
        }
    }
}
