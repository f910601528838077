use crate::chess::Color;
use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

/// Takes a seat in a waiting game. Seated wagers move from the user's ledger
/// balance into the game's escrow; the game starts once both seats fill.
pub fn join_game(ctx: Context<JoinGame>, color: Color) -> Result<()> {
    let user = &mut ctx.accounts.user;
    let game = &mut ctx.accounts.game;

    require!(game.is_waiting(), SolChessError::GameAlreadyStarted);
    require!(user.not_in_game(), SolChessError::UserAlreadyInGame);
    require!(game.color_available(color), SolChessError::ColorNotAvailable);

    if game.has_wager() {
        user.debit(game.wager_amount())?;
    }
    game.seat_player(user.key(), color);
    user.set_game(game.key());
    msg!("{} seated as {}", user.key(), color);

    if game.is_full() {
        game.start(Clock::get()?.unix_timestamp);
        msg!("Game on. White to move");
    }
    Ok(())
}

#[derive(Accounts)]
pub struct JoinGame<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
