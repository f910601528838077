use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

/// Settles a timed game whose side to move has run out its clock. Anyone may
/// crank this; `user` is the player to move and `adversary_user` the other
/// seat. A call before the flag falls is a no-op.
pub fn check_timer(ctx: Context<CheckTimer>) -> Result<()> {
    let user = &mut ctx.accounts.user;
    let adversary_user = &mut ctx.accounts.adversary_user;
    let game = &mut ctx.accounts.game;
    let now = Clock::get()?.unix_timestamp;

    require!(game.is_ongoing(), SolChessError::InvalidGameState);
    require!(game.is_timed(), SolChessError::GameNotTimed);
    let color = game.turn().ok_or(SolChessError::InvalidGameState)?;
    require!(game.seat(color) == Some(user.key()), SolChessError::NotInGame);
    require!(
        game.adversary(color) == Some(adversary_user.key()),
        SolChessError::InvalidAdversaryUserAccount
    );

    if !game.time_expired(now) {
        msg!("{} still has time", color);
        return Ok(());
    }

    game.set_winner(color.opposite());
    msg!("{} flagged. {} wins on time", color, color.opposite());

    if game.has_wager() {
        adversary_user.credit(game.pot())?;
    }
    if game.is_rated() {
        let user_elo = user.elo;
        let adversary_elo = adversary_user.elo;
        user.record_loss(adversary_elo);
        adversary_user.record_win(user_elo);
    }
    user.clear_game();
    adversary_user.clear_game();
    Ok(())
}

#[derive(Accounts)]
pub struct CheckTimer<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub user: Account<'info, User>,

    #[account(mut)]
    pub adversary_user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
