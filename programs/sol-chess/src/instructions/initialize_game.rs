use crate::chess::{Board, CastlingRights, DrawState, GameConfig, GameState};
use crate::error::SolChessError;
use crate::state::{Game, User, SEED_GAME};
use anchor_lang::prelude::*;

pub fn initialize_game(ctx: Context<InitializeGame>, config: GameConfig) -> Result<()> {
    require!(config.is_valid(), SolChessError::InvalidGameConfig);

    let user = &mut ctx.accounts.user;
    let game = &mut ctx.accounts.game;

    game.bump = ctx.bumps.game;
    game.owner = user.key();
    game.id = user.games;
    game.created_at = Clock::get()?.unix_timestamp;
    game.board = Board::default();
    game.state = GameState::Waiting;
    game.white = None;
    game.black = None;
    game.enpassant = None;
    game.castling = CastlingRights::default();
    game.draw_state = DrawState::Neither;
    game.config = config;
    game.clock = None;

    user.increment_games();

    msg!("Game {} created by {}", game.key(), game.owner);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGame<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(
        init,
        payer = payer,
        space = Game::LEN,
        seeds = [SEED_GAME, user.key().as_ref(), &user.games.to_be_bytes()],
        bump
    )]
    pub game: Account<'info, Game>,

    pub system_program: Program<'info, System>,
}
