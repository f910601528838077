use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

/// Registers a draw offer. An offer standing from the other side settles the
/// game as a draw; any move withdraws standing offers.
pub fn offer_draw(ctx: Context<OfferDraw>) -> Result<()> {
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
    require!(
        !game.draw_state.offered_by(color),
        SolChessError::AlreadyOfferedDraw
    );

    game.draw_state.register_offer(color);
    msg!("{} offers a draw", color);

    if game.draw_state.is_draw() {
        game.set_draw();
        msg!("Draw agreed");

        if game.has_wager() {
            user.credit(game.wager_amount())?;
            adversary_user.credit(game.wager_amount())?;
        }
        if game.is_rated() {
            let user_elo = user.elo;
            let adversary_elo = adversary_user.elo;
            user.record_draw(adversary_elo);
            adversary_user.record_draw(user_elo);
        }
        user.clear_game();
        adversary_user.clear_game();
    }
    Ok(())
}

#[derive(Accounts)]
pub struct OfferDraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut)]
    pub adversary_user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
