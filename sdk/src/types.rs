//! Serializable views of on-chain Sea Option accounts
//!
//! These are what the CLI prints; they carry derived values such as the
//! settlement status so callers never need to decode raw account data.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use sea_option::{OptionMarket, ProgramConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub address: String,
    pub authority: String,
    pub market_count: u64,
}

impl ConfigInfo {
    pub fn from_state(address: &Pubkey, config: &ProgramConfig) -> Self {
        Self {
            address: address.to_string(),
            authority: config.authority.to_string(),
            market_count: config.market_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub address: String,
    pub creator: String,
    pub base_mint: String,
    pub collateral_mint: String,
    pub option_note_mint: String,
    pub vault: String,
    pub kind: OptionKind,
    pub strike_price: u64,
    pub premium_per_lot: u64,
    pub lot_size: u64,
    pub expiry_timestamp: i64,
    /// `None` until the market is settled
    pub expiry_price: Option<u64>,
    /// Payoff of one lot at the recorded expiry price
    pub payoff_per_lot: u64,
    pub lots_outstanding: u64,
    pub total_premium: u64,
}

impl MarketInfo {
    pub fn from_state(address: &Pubkey, market: &OptionMarket) -> Self {
        Self {
            address: address.to_string(),
            creator: market.creator.to_string(),
            base_mint: market.base_mint.to_string(),
            collateral_mint: market.collateral_mint.to_string(),
            option_note_mint: market.option_note_mint.to_string(),
            vault: market.vault.to_string(),
            kind: if market.is_put {
                OptionKind::Put
            } else {
                OptionKind::Call
            },
            strike_price: market.strike_price,
            premium_per_lot: market.premium_per_lot,
            lot_size: market.lot_size,
            expiry_timestamp: market.expiry_timestamp,
            expiry_price: market.is_settled().then_some(market.expiry_price),
            payoff_per_lot: market.payoff_per_lot(),
            lots_outstanding: market.lots_outstanding,
            total_premium: market.total_premium,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.expiry_price.is_some()
    }
}
