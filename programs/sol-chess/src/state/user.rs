use crate::error::SolChessError;
use anchor_lang::prelude::*;

pub const SEED_USER: &[u8] = b"user";

/// Per-wallet profile: rating, lifetime game count, the game currently
/// occupied, and the lamport balance held in the program vault.
#[account]
pub struct User {
    pub current_game: Option<Pubkey>,
    pub elo: u32,
    pub games: u64,
    pub balance: u64,
}

impl User {
    pub const LEN: usize = 8 + // discriminator
        33 + // current_game
        4 + // elo
        8 + // games
        8; // balance

    pub const STARTING_ELO: u32 = 800;

    const ELO_K: f64 = 40.0;

    pub fn pda(owner: Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[SEED_USER, owner.as_ref()], &crate::ID)
    }

    pub fn set_game(&mut self, game: Pubkey) {
        self.current_game = Some(game);
    }

    pub fn clear_game(&mut self) {
        self.current_game = None;
    }

    pub fn in_game(&self) -> bool {
        self.current_game.is_some()
    }

    pub fn not_in_game(&self) -> bool {
        self.current_game.is_none()
    }

    pub fn increment_games(&mut self) {
        self.games += 1;
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(SolChessError::BalanceOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(SolChessError::InsufficientBalance)?;
        Ok(())
    }

    /// Chance of beating an opponent at `adversary_elo`, per the logistic
    /// Elo curve.
    pub fn expected_score(&self, adversary_elo: u32) -> f64 {
        1.0 / (1.0 + 10f64.powf((f64::from(adversary_elo) - f64::from(self.elo)) / 400.0))
    }

    pub fn record_win(&mut self, adversary_elo: u32) {
        self.rate(adversary_elo, 1.0);
    }

    pub fn record_draw(&mut self, adversary_elo: u32) {
        self.rate(adversary_elo, 0.5);
    }

    pub fn record_loss(&mut self, adversary_elo: u32) {
        self.rate(adversary_elo, 0.0);
    }

    /// Applies the rating delta for a result against a given opponent rating.
    /// Pass the opponent's rating from before the game so both sides are
    /// rated against the same numbers.
    fn rate(&mut self, adversary_elo: u32, score: f64) {
        let delta = (Self::ELO_K * (score - self.expected_score(adversary_elo))).round() as i64;
        let rated = i64::from(self.elo) + delta;
        self.elo = rated.clamp(0, i64::from(u32::MAX)) as u32;
    }
}
