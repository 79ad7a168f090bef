use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::constants::MARKET_SEED;
use crate::error::SeaOptionError;
use crate::events::OptionPurchased;
use crate::state::OptionMarket;

#[derive(Accounts)]
pub struct BuyOption<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [
            MARKET_SEED,
            market.base_mint.as_ref(),
            market.collateral_mint.as_ref(),
            market.expiry_timestamp.to_le_bytes().as_ref()
        ],
        bump = market.bump,
        has_one = base_mint @ SeaOptionError::MintMismatch,
        has_one = collateral_mint @ SeaOptionError::MintMismatch,
        has_one = option_note_mint @ SeaOptionError::MintMismatch,
        has_one = vault @ SeaOptionError::VaultMismatch,
    )]
    pub market: Box<Account<'info, OptionMarket>>,

    pub base_mint: Box<Account<'info, Mint>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub option_note_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Receives the minted option notes
    #[account(
        mut,
        constraint = option_note_account.mint == option_note_mint.key() @ SeaOptionError::MintMismatch
    )]
    pub option_note_account: Box<Account<'info, TokenAccount>>,

    /// Depositor's collateral, debited for the premium
    #[account(
        mut,
        constraint = collateral_account.mint == collateral_mint.key() @ SeaOptionError::MintMismatch,
        constraint = collateral_account.owner == depositor.key() @ SeaOptionError::OwnerMismatch
    )]
    pub collateral_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn buy_option_handler(ctx: Context<BuyOption>, lot_size: u64) -> Result<()> {
    require!(lot_size > 0, SeaOptionError::InvalidLotSize);

    let now = Clock::get()?.unix_timestamp;
    let market = &ctx.accounts.market;
    require!(!market.is_expired(now), SeaOptionError::MarketExpired);

    let premium = market
        .premium_for(lot_size)
        .ok_or(SeaOptionError::MathOverflow)?;
    let notes = OptionMarket::notes_for(lot_size).ok_or(SeaOptionError::MathOverflow)?;

    require!(
        ctx.accounts.collateral_account.amount >= premium,
        SeaOptionError::InsufficientBalance
    );

    // Premium: depositor -> vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.collateral_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        premium,
    )?;

    let expiry = market.expiry_timestamp.to_le_bytes();
    let bump = [market.bump];
    let seeds = market.signer_seeds(&expiry, &bump);
    let signer: &[&[&[u8]]] = &[&seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.option_note_mint.to_account_info(),
                to: ctx.accounts.option_note_account.to_account_info(),
                authority: market.to_account_info(),
            },
            signer,
        ),
        notes,
    )?;

    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;
    market.lots_outstanding = market
        .lots_outstanding
        .checked_add(lot_size)
        .ok_or(SeaOptionError::MathOverflow)?;
    market.total_premium = market
        .total_premium
        .checked_add(premium)
        .ok_or(SeaOptionError::MathOverflow)?;

    emit!(OptionPurchased {
        market: market_key,
        buyer: ctx.accounts.depositor.key(),
        lots: lot_size,
        premium_paid: premium,
    });

    msg!(
        "Bought {} lots on {} for {} premium",
        lot_size,
        market_key,
        premium
    );

    Ok(())
}
