use anchor_lang::prelude::*;

declare_id!("3QG4u81iuHg8a7KhpsgJr2J4teJbUFs3ngtgBKG8zvA1");

pub mod chess;
pub mod error;
pub mod instructions;
pub mod state;

pub use chess::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod sol_chess {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create the caller's user account, keyed by their wallet.
    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        instructions::initialize_user(ctx)
    }

    /// Open a new game with the given time control, rating, and wager
    /// settings. The creator does not take a seat.
    pub fn initialize_game(ctx: Context<InitializeGame>, config: GameConfig) -> Result<()> {
        instructions::initialize_game(ctx, config)
    }

    /// Sit down as `color`. Escrows the wager; the second join starts
    /// the game.
    pub fn join_game(ctx: Context<JoinGame>, color: Color) -> Result<()> {
        instructions::join_game(ctx, color)
    }

    /// Play a move for the side to move. Checkmate and stalemate settle
    /// the game immediately.
    pub fn move_piece(ctx: Context<MovePiece>, from: Square, to: Square) -> Result<()> {
        instructions::move_piece(ctx, from, to)
    }

    /// Offer a draw; a standing offer from the other side accepts it.
    pub fn offer_draw(ctx: Context<OfferDraw>) -> Result<()> {
        instructions::offer_draw(ctx)
    }

    /// Concede the game to the adversary.
    pub fn resign(ctx: Context<Resign>) -> Result<()> {
        instructions::resign(ctx)
    }

    /// Vacate a seat before the game starts, refunding the wager.
    pub fn leave_game(ctx: Context<LeaveGame>) -> Result<()> {
        instructions::leave_game(ctx)
    }

    /// Permissionless crank that settles a timed game once the side to
    /// move has flagged.
    pub fn check_timer(ctx: Context<CheckTimer>) -> Result<()> {
        instructions::check_timer(ctx)
    }

    /// Fund the caller's ledger balance from their wallet.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Pay ledger balance back out to the caller's wallet.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}
