use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::MARKET_SEED;
use crate::error::SeaOptionError;
use crate::events::OptionRedeemed;
use crate::state::OptionMarket;

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub redeemer: Signer<'info>,

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

    /// Collateral account receiving the payoff
    #[account(
        mut,
        constraint = redeemer_account.mint == collateral_mint.key() @ SeaOptionError::MintMismatch
    )]
    pub redeemer_account: Box<Account<'info, TokenAccount>>,

    /// Notes being redeemed; all of them are burned
    #[account(
        mut,
        constraint = option_note_account.mint == option_note_mint.key() @ SeaOptionError::MintMismatch,
        constraint = option_note_account.owner == redeemer.key() @ SeaOptionError::OwnerMismatch
    )]
    pub option_note_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn redeem_handler(ctx: Context<Redeem>) -> Result<()> {
    let market = &ctx.accounts.market;
    require!(market.is_settled(), SeaOptionError::ExpiryPriceNotFound);

    let notes = ctx.accounts.option_note_account.amount;
    let lots = OptionMarket::lots_for_notes(notes).ok_or(SeaOptionError::InvalidOptionToken)?;

    let owed = market.payout_for(lots).ok_or(SeaOptionError::MathOverflow)?;
    let payout = owed.min(ctx.accounts.vault.amount);
    if payout < owed {
        msg!("Vault short by {}, paying out {}", owed - payout, payout);
    }

    if payout > 0 {
        msg!("Profit: {}", payout);

        let expiry = market.expiry_timestamp.to_le_bytes();
        let bump = [market.bump];
        let seeds = market.signer_seeds(&expiry, &bump);
        let signer: &[&[&[u8]]] = &[&seeds];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.redeemer_account.to_account_info(),
                    authority: market.to_account_info(),
                },
                signer,
            ),
            payout,
        )?;
    }

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.option_note_mint.to_account_info(),
                from: ctx.accounts.option_note_account.to_account_info(),
                authority: ctx.accounts.redeemer.to_account_info(),
            },
        ),
        notes,
    )?;

    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;
    market.lots_outstanding = market
        .lots_outstanding
        .checked_sub(lots)
        .ok_or(SeaOptionError::MathOverflow)?;

    emit!(OptionRedeemed {
        market: market_key,
        redeemer: ctx.accounts.redeemer.key(),
        lots,
        payout,
    });

    msg!("Redeemed {} lots on {} for {}", lots, market_key, payout);

    Ok(())
}
