use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

/// Gives up a seat in a game that has not started, refunding the escrowed
/// wager.
pub fn leave_game(ctx: Context<LeaveGame>) -> Result<()> {
    let user = &mut ctx.accounts.user;
    let game = &mut ctx.accounts.game;

    require!(game.is_waiting(), SolChessError::GameAlreadyStarted);
    let color = game
        .player_color(user.key())
        .ok_or(SolChessError::NotInGame)?;

    game.vacate(color);
    if game.has_wager() {
        user.credit(game.wager_amount())?;
    }
    user.clear_game();

    msg!("{} left the game", user.key());
    Ok(())
}

#[derive(Accounts)]
pub struct LeaveGame<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
