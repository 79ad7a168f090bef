use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::SeaOptionError;
use crate::events::MarketCreated;
use crate::state::{OptionMarket, ProgramConfig};

#[derive(Accounts)]
#[instruction(strike_price: u64, expiry_timestamp: i64)]
pub struct InitOption<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, ProgramConfig>>,

    #[account(
        init,
        payer = payer,
        space = OptionMarket::SIZE,
        seeds = [
            MARKET_SEED,
            base_mint.key().as_ref(),
            collateral_mint.key().as_ref(),
            expiry_timestamp.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub market: Box<Account<'info, OptionMarket>>,

    /// Underlying asset
    pub base_mint: Box<Account<'info, Mint>>,

    /// Premium and settlement asset
    #[account(
        constraint = collateral_mint.key() != base_mint.key() @ SeaOptionError::IdenticalMints
    )]
    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [OPTION_NOTE_MINT_SEED, market.key().as_ref()],
        bump,
        mint::decimals = NOTE_DECIMALS,
        mint::authority = market
    )]
    pub option_note_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [VAULT_SEED, market.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = market
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn init_option_handler(
    ctx: Context<InitOption>,
    strike_price: u64,
    expiry_timestamp: i64,
    is_put: bool,
    lot_size: u64,
    premium_per_lot: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require!(strike_price > 0, SeaOptionError::InvalidStrikePrice);
    require!(premium_per_lot > 0, SeaOptionError::InvalidPremium);
    require!(lot_size > 0, SeaOptionError::InvalidLotSize);
    require!(expiry_timestamp > now, SeaOptionError::ExpiryInPast);

    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;

    market.creator = ctx.accounts.payer.key();
    market.base_mint = ctx.accounts.base_mint.key();
    market.collateral_mint = ctx.accounts.collateral_mint.key();
    market.option_note_mint = ctx.accounts.option_note_mint.key();
    market.vault = ctx.accounts.vault.key();
    market.strike_price = strike_price;
    market.premium_per_lot = premium_per_lot;
    market.lot_size = lot_size;
    market.expiry_price = 0;
    market.expiry_timestamp = expiry_timestamp;
    market.is_put = is_put;
    market.lots_outstanding = 0;
    market.total_premium = 0;
    market.bump = ctx.bumps.market;
    market.vault_bump = ctx.bumps.vault;
    market.option_note_mint_bump = ctx.bumps.option_note_mint;

    let config = &mut ctx.accounts.config;
    config.market_count = config
        .market_count
        .checked_add(1)
        .ok_or(SeaOptionError::MathOverflow)?;

    emit!(MarketCreated {
        market: market_key,
        base_mint: market.base_mint,
        collateral_mint: market.collateral_mint,
        strike_price,
        premium_per_lot,
        expiry_timestamp,
        is_put,
    });

    msg!(
        "Option market {} opened: {} strike {} expiring {}",
        market_key,
        if is_put { "put" } else { "call" },
        strike_price,
        expiry_timestamp
    );
    msg!("Premium per lot: {}, lot size: {}", premium_per_lot, lot_size);

    Ok(())
}
