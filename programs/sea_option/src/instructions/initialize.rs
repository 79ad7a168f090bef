use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ProgramInitialized;
use crate::state::ProgramConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the settlement authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ProgramConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ProgramConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;

    config.authority = ctx.accounts.authority.key();
    config.market_count = 0;
    config.bump = ctx.bumps.config;

    emit!(ProgramInitialized {
        authority: config.authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Sea Option initialized with settlement authority: {}", config.authority);

    Ok(())
}
