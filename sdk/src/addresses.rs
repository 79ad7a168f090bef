//! Address derivation for Sea Option PDAs

use sea_option::{CONFIG_SEED, MARKET_SEED, OPTION_NOTE_MINT_SEED, VAULT_SEED};
use solana_sdk::pubkey::Pubkey;

/// Find the program config PDA
pub fn find_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], program_id)
}

/// Find the market PDA for a base/collateral pair and expiry
pub fn find_market_pda(
    program_id: &Pubkey,
    base_mint: &Pubkey,
    collateral_mint: &Pubkey,
    expiry_timestamp: i64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            MARKET_SEED,
            base_mint.as_ref(),
            collateral_mint.as_ref(),
            &expiry_timestamp.to_le_bytes(),
        ],
        program_id,
    )
}

pub fn find_option_note_mint_pda(program_id: &Pubkey, market: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[OPTION_NOTE_MINT_SEED, market.as_ref()], program_id)
}

pub fn find_vault_pda(program_id: &Pubkey, market: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, market.as_ref()], program_id)
}

/// Every address a market owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketAddresses {
    pub market: Pubkey,
    pub option_note_mint: Pubkey,
    pub vault: Pubkey,
}

impl MarketAddresses {
    pub fn derive(
        program_id: &Pubkey,
        base_mint: &Pubkey,
        collateral_mint: &Pubkey,
        expiry_timestamp: i64,
    ) -> Self {
        let (market, _) = find_market_pda(program_id, base_mint, collateral_mint, expiry_timestamp);
        let (option_note_mint, _) = find_option_note_mint_pda(program_id, &market);
        let (vault, _) = find_vault_pda(program_id, &market);
        Self {
            market,
            option_note_mint,
            vault,
        }
    }
}
