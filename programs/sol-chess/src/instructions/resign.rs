use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

pub fn resign(ctx: Context<Resign>) -> Result<()> {
    let user = &mut ctx.accounts.user;
    let adversary_user = &mut ctx.accounts.adversary_user;
    let game = &mut ctx.accounts.game;

    require!(game.is_ongoing(), SolChessError::InvalidGameState);
    let color = game
        .player_color(user.key())
        .ok_or(SolChessError::NotInGame)?;
    require!(
        game.adversary(color) == Some(adversary_user.key()),
        SolChessError::InvalidAdversaryUserAccount
    );

    game.set_winner(color.opposite());
    msg!("{} resigns", color);

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
pub struct Resign<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut)]
    pub adversary_user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
