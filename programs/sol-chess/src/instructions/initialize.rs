use anchor_lang::prelude::*;

pub fn initialize(_ctx: Context<Initialize>) -> Result<()> {
    msg!("Program initialized");
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize {}
