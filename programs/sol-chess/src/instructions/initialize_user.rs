use crate::state::{User, SEED_USER};
use anchor_lang::prelude::*;

pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
    let user = &mut ctx.accounts.user;
    user.current_game = None;
    user.elo = User::STARTING_ELO;
    user.games = 0;
    user.balance = 0;

    msg!("User account created for {}", ctx.accounts.payer.key());
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = User::LEN,
        seeds = [SEED_USER, payer.key().as_ref()],
        bump
    )]
    pub user: Account<'info, User>,

    pub system_program: Program<'info, System>,
}
