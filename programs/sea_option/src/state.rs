use anchor_lang::prelude::*;

use crate::constants::{MARKET_SEED, NOTE_UNITS_PER_LOT};

/// Singleton program configuration
#[account]
#[derive(Default, Debug)]
pub struct ProgramConfig {
    /// Key allowed to settle market expiries
    pub authority: Pubkey,
    /// Number of markets opened so far
    pub market_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ProgramConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 + // market_count
        1; // bump
}

/// An option market for one base/collateral pair and expiry
#[account]
#[derive(Default, Debug)]
pub struct OptionMarket {
    /// Payer that opened the market
    pub creator: Pubkey,
    /// Mint of the underlying token; e.g. SOL
    pub base_mint: Pubkey,
    /// Mint of the token used as collateral and for premiums; e.g. USDC
    pub collateral_mint: Pubkey,
    /// Mint of the notes representing purchased lots
    pub option_note_mint: Pubkey,
    /// Token account with custody over collected premiums
    pub vault: Pubkey,
    /// Strike price in collateral base units per lot
    pub strike_price: u64,
    /// Static premium charged per lot, in collateral base units
    pub premium_per_lot: u64,
    /// Units of the underlying covered by one lot
    pub lot_size: u64,
    /// Price of the underlying at expiry; zero until settled
    pub expiry_price: u64,
    /// Expiry as a unix timestamp
    pub expiry_timestamp: i64,
    /// `true` for a put, `false` for a call
    pub is_put: bool,
    /// Lots sold and not yet redeemed
    pub lots_outstanding: u64,
    /// Premium collected over the market's lifetime
    pub total_premium: u64,
    pub bump: u8,
    pub vault_bump: u8,
    pub option_note_mint_bump: u8,
}

impl OptionMarket {
    pub const SIZE: usize = 8 + // discriminator
        32 + // creator
        32 + // base_mint
        32 + // collateral_mint
        32 + // option_note_mint
        32 + // vault
        8 + // strike_price
        8 + // premium_per_lot
        8 + // lot_size
        8 + // expiry_price
        8 + // expiry_timestamp
        1 + // is_put
        8 + // lots_outstanding
        8 + // total_premium
        1 + // bump
        1 + // vault_bump
        1; // option_note_mint_bump

    pub fn is_settled(&self) -> bool {
        self.expiry_price != 0
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expiry_timestamp
    }

    /// Premium owed for `lots` lots
    pub fn premium_for(&self, lots: u64) -> Option<u64> {
        lots.checked_mul(self.premium_per_lot)
    }

    /// Intrinsic value of one lot at the recorded expiry price
    pub fn payoff_per_lot(&self) -> u64 {
        if !self.is_settled() {
            return 0;
        }
        if self.is_put {
            self.strike_price.saturating_sub(self.expiry_price)
        } else {
            self.expiry_price.saturating_sub(self.strike_price)
        }
    }

    pub fn payout_for(&self, lots: u64) -> Option<u64> {
        lots.checked_mul(self.payoff_per_lot())
    }

    /// Note base units minted for `lots` lots
    pub fn notes_for(lots: u64) -> Option<u64> {
        lots.checked_mul(NOTE_UNITS_PER_LOT)
    }

    /// Lots represented by a note balance; `None` unless it is a whole number of lots
    pub fn lots_for_notes(notes: u64) -> Option<u64> {
        if notes == 0 || notes % NOTE_UNITS_PER_LOT != 0 {
            return None;
        }
        Some(notes / NOTE_UNITS_PER_LOT)
    }

    /// Seeds the market PDA signs with
    pub fn signer_seeds<'a>(&'a self, expiry: &'a [u8; 8], bump: &'a [u8; 1]) -> [&'a [u8]; 5] {
        [
            MARKET_SEED,
            self.base_mint.as_ref(),
            self.collateral_mint.as_ref(),
            expiry,
            bump,
        ]
    }
}
