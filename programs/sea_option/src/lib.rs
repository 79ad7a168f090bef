//! Sea Option - cash-settled European option markets
//!
//! A market is opened per (base mint, collateral mint, expiry). Buyers pay a
//! fixed premium per lot into the market vault and receive option notes.
//! After expiry the settlement authority records the expiry price and note
//! holders redeem their notes for the option's intrinsic value.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod instructions;

pub use constants::*;
pub use error::SeaOptionError;
pub use events::*;
pub use state::*;

pub use instructions::*;

#[program]
pub mod sea_option {
    use super::*;

    /// Create the program config and record the settlement authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    /// Open an option market for a base/collateral pair at a given expiry
    pub fn init_option(
        ctx: Context<InitOption>,
        strike_price: u64,
        expiry_timestamp: i64,
        is_put: bool,
        lot_size: u64,
        premium_per_lot: u64,
    ) -> Result<()> {
        init_option_handler(
            ctx,
            strike_price,
            expiry_timestamp,
            is_put,
            lot_size,
            premium_per_lot,
        )
    }

    /// Pay the premium for `lot_size` lots and receive option notes
    pub fn buy_option(ctx: Context<BuyOption>, lot_size: u64) -> Result<()> {
        buy_option_handler(ctx, lot_size)
    }

    /// Record the expiry price of a market
    pub fn settle_expiry(ctx: Context<SettleExpiry>, expiry_price: u64) -> Result<()> {
        settle_expiry_handler(ctx, expiry_price)
    }

    /// Burn option notes and collect any payoff
    pub fn redeem(ctx: Context<Redeem>) -> Result<()> {
        redeem_handler(ctx)
    }
}
