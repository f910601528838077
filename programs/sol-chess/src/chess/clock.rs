use crate::chess::Color;
use anchor_lang::prelude::*;

/// Per-side chess clock. Each side banks remaining seconds; the side to move
/// is charged for the wall time since `last_move` and earns `increment` back
/// once its move lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct GameClock {
    pub last_move: i64,
    pub white_remaining: i64,
    pub black_remaining: i64,
    pub increment: i64,
}

impl GameClock {
    pub fn new(base_seconds: u32, increment_seconds: u32, now: i64) -> GameClock {
        GameClock {
            last_move: now,
            white_remaining: i64::from(base_seconds),
            black_remaining: i64::from(base_seconds),
            increment: i64::from(increment_seconds),
        }
    }

    pub fn remaining(&self, color: Color) -> i64 {
        if color.is_white() {
            self.white_remaining
        } else {
            self.black_remaining
        }
    }

    /// Seconds the side to move would have left if it moved at `now`.
    pub fn projected_remaining(&self, color: Color, now: i64) -> i64 {
        self.remaining(color)
            .saturating_sub(self.elapsed_since_last_move(now))
    }

    pub fn expired(&self, color: Color, now: i64) -> bool {
        self.projected_remaining(color, now) <= 0
    }

    pub fn record_move(&mut self, color: Color, now: i64) {
        let elapsed = self.elapsed_since_last_move(now);
        let bank = if color.is_white() {
            &mut self.white_remaining
        } else {
            &mut self.black_remaining
        };
        *bank = bank.saturating_sub(elapsed).saturating_add(self.increment);
        self.last_move = now;
    }

    fn elapsed_since_last_move(&self, now: i64) -> i64 {
        (now - self.last_move).max(0)
    }
}
