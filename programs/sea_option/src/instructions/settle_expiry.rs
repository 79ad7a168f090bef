use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::SeaOptionError;
use crate::events::ExpirySettled;
use crate::state::{OptionMarket, ProgramConfig};

#[derive(Accounts)]
pub struct SettleExpiry<'info> {
    /// Must be the authority recorded by `initialize`
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ SeaOptionError::UnauthorizedSettlement,
    )]
    pub config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub market: Box<Account<'info, OptionMarket>>,
}

pub fn settle_expiry_handler(ctx: Context<SettleExpiry>, expiry_price: u64) -> Result<()> {
    require!(expiry_price > 0, SeaOptionError::InvalidPrice);

    let now = Clock::get()?.unix_timestamp;
    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;

    require!(market.is_expired(now), SeaOptionError::MarketNotExpired);

    // The first recorded price is final
    if market.is_settled() {
        msg!(
            "Market {} already settled at {}, ignoring {}",
            market_key,
            market.expiry_price,
            expiry_price
        );
        return Ok(());
    }

    market.expiry_price = expiry_price;

    emit!(ExpirySettled {
        market: market_key,
        expiry_price,
        timestamp: now,
    });

    msg!("Market {} settled at {}", market_key, expiry_price);

    Ok(())
}
