use crate::chess::Square;
use crate::error::SolChessError;
use crate::state::{Game, User};
use anchor_lang::prelude::*;

/// Plays one move for the side to move. Checkmate and stalemate settle the
/// game on the spot: escrowed wagers pay out and rated games exchange Elo,
/// with both ratings computed from the pre-game numbers.
pub fn move_piece(ctx: Context<MovePiece>, from: Square, to: Square) -> Result<()> {
    let user = &mut ctx.accounts.user;
    let adversary_user = &mut ctx.accounts.adversary_user;
    let game = &mut ctx.accounts.game;
    let now = Clock::get()?.unix_timestamp;

    require!(game.is_ongoing(), SolChessError::InvalidGameState);
    let color = game.turn().ok_or(SolChessError::InvalidGameState)?;
    require!(
        game.seat(color) == Some(user.key()),
        SolChessError::NotUsersTurn
    );
    require!(
        game.adversary(color) == Some(adversary_user.key()),
        SolChessError::InvalidAdversaryUserAccount
    );
    require!(!game.time_expired(now), SolChessError::TimeExpired);

    game.apply_move(color, from, to, now)?;
    msg!("{} played {} to {}", color, from, to);

    let opponent = color.opposite();
    if game.is_checkmated(opponent) {
        game.set_winner(color);
        msg!("Checkmate. {} wins", color);

        if game.has_wager() {
            user.credit(game.pot())?;
        }
        if game.is_rated() {
            let user_elo = user.elo;
            let adversary_elo = adversary_user.elo;
            user.record_win(adversary_elo);
            adversary_user.record_loss(user_elo);
        }
        user.clear_game();
        adversary_user.clear_game();
    } else if game.is_stalemated(opponent) {
        game.set_draw();
        msg!("Stalemate. Game drawn");

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
pub struct MovePiece<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut)]
    pub adversary_user: Account<'info, User>,

    #[account(mut, address = Game::pda(game.owner, game.id).0)]
    pub game: Account<'info, Game>,
}
