use anchor_lang::prelude::*;

#[event]
pub struct ProgramInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct MarketCreated {
    pub market: Pubkey,
    pub base_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub strike_price: u64,
    pub premium_per_lot: u64,
    pub expiry_timestamp: i64,
    pub is_put: bool,
}

#[event]
pub struct OptionPurchased {
    pub market: Pubkey,
    pub buyer: Pubkey,
    pub lots: u64,
    pub premium_paid: u64,
}

#[event]
pub struct ExpirySettled {
    pub market: Pubkey,
    pub expiry_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct OptionRedeemed {
    pub market: Pubkey,
    pub redeemer: Pubkey,
    pub lots: u64,
    pub payout: u64,
}
