use crate::state::User;
use anchor_lang::prelude::*;

/// Moves lamports from the caller's wallet into the program vault and credits
/// the same amount to the caller's ledger balance.
pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let user = &mut ctx.accounts.user;
    user.credit(amount)?;

    msg!("Deposited {} lamports, balance {}", amount, user.balance);
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut, seeds = [b"vault"], bump)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
