use crate::state::User;
use anchor_lang::prelude::*;

/// Pays lamports back out of the program vault. The ledger debit fails first
/// when the caller asks for more than they hold.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let user = &mut ctx.accounts.user;
    user.debit(amount)?;

    let vault_bump = ctx.bumps.vault;
    let seeds = &[b"vault".as_ref(), &[vault_bump]];
    let signer = &[&seeds[..]];

    anchor_lang::system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.payer.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    msg!("Withdrew {} lamports, balance {}", amount, user.balance);
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut, address = User::pda(payer.key()).0)]
    pub user: Account<'info, User>,

    #[account(mut, seeds = [b"vault"], bump)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
