use crate::chess::GameClock;
use anchor_lang::prelude::*;

/// Parameters fixed at game creation. `timer` and `increment` come as a pair;
/// games with neither run unclocked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct GameConfig {
    pub timer: Option<u32>,
    pub increment: Option<u32>,
    pub is_rated: bool,
    pub wager: Option<u64>,
}

impl GameConfig {
    pub fn is_valid(&self) -> bool {
        let time_ok = match (self.timer, self.increment) {
            (Some(timer), Some(_)) => timer > 0,
            (None, None) => true,
            _ => false,
        };
        time_ok && self.wager != Some(0)
    }

    pub fn is_timed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn has_wager(&self) -> bool {
        self.wager.is_some()
    }

    pub fn wager_amount(&self) -> u64 {
        self.wager.unwrap_or(0)
    }

    pub fn clock(&self, now: i64) -> Option<GameClock> {
        match (self.timer, self.increment) {
            (Some(base), Some(increment)) => Some(GameClock::new(base, increment, now)),
            _ => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            timer: None,
            increment: None,
            is_rated: false,
            wager: None,
        }
    }
}
