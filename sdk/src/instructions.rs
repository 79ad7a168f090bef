//! Instruction builders for the `sea_option` program

use anchor_lang::{InstructionData, ToAccountMetas};
use sea_option::OptionMarket;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program, sysvar};

use crate::addresses::{find_config_pda, MarketAddresses};

/// Parameters for opening a market
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitOptionParams {
    pub base_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub strike_price: u64,
    pub expiry_timestamp: i64,
    pub is_put: bool,
    pub lot_size: u64,
    pub premium_per_lot: u64,
}

/// Accounts every market instruction touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketAccounts {
    pub market: Pubkey,
    pub base_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub option_note_mint: Pubkey,
    pub vault: Pubkey,
}

impl MarketAccounts {
    /// Accounts referenced by a fetched market
    pub fn from_state(market: Pubkey, state: &OptionMarket) -> Self {
        Self {
            market,
            base_mint: state.base_mint,
            collateral_mint: state.collateral_mint,
            option_note_mint: state.option_note_mint,
            vault: state.vault,
        }
    }

    /// Accounts derived from the market seeds without fetching anything
    pub fn derive(
        program_id: &Pubkey,
        base_mint: &Pubkey,
        collateral_mint: &Pubkey,
        expiry_timestamp: i64,
    ) -> Self {
        let addresses =
            MarketAddresses::derive(program_id, base_mint, collateral_mint, expiry_timestamp);
        Self {
            market: addresses.market,
            base_mint: *base_mint,
            collateral_mint: *collateral_mint,
            option_note_mint: addresses.option_note_mint,
            vault: addresses.vault,
        }
    }
}

pub fn initialize(program_id: &Pubkey, authority: &Pubkey) -> Instruction {
    let (config, _) = find_config_pda(program_id);
    Instruction {
        program_id: *program_id,
        accounts: sea_option::accounts::Initialize {
            authority: *authority,
            config,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: sea_option::instruction::Initialize {}.data(),
    }
}

/// Build `init_option`; returns the derived market accounts alongside
pub fn init_option(
    program_id: &Pubkey,
    payer: &Pubkey,
    params: &InitOptionParams,
) -> (Instruction, MarketAccounts) {
    let (config, _) = find_config_pda(program_id);
    let accounts = MarketAccounts::derive(
        program_id,
        &params.base_mint,
        &params.collateral_mint,
        params.expiry_timestamp,
    );

    let ix = Instruction {
        program_id: *program_id,
        accounts: sea_option::accounts::InitOption {
            payer: *payer,
            config,
            market: accounts.market,
            base_mint: accounts.base_mint,
            collateral_mint: accounts.collateral_mint,
            option_note_mint: accounts.option_note_mint,
            vault: accounts.vault,
            system_program: system_program::ID,
            token_program: spl_token::ID,
            rent: sysvar::rent::ID,
        }
        .to_account_metas(None),
        data: sea_option::instruction::InitOption {
            strike_price: params.strike_price,
            expiry_timestamp: params.expiry_timestamp,
            is_put: params.is_put,
            lot_size: params.lot_size,
            premium_per_lot: params.premium_per_lot,
        }
        .data(),
    };

    (ix, accounts)
}

pub fn buy_option(
    program_id: &Pubkey,
    depositor: &Pubkey,
    market: &MarketAccounts,
    option_note_account: &Pubkey,
    collateral_account: &Pubkey,
    lots: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: sea_option::accounts::BuyOption {
            depositor: *depositor,
            market: market.market,
            base_mint: market.base_mint,
            collateral_mint: market.collateral_mint,
            option_note_mint: market.option_note_mint,
            vault: market.vault,
            option_note_account: *option_note_account,
            collateral_account: *collateral_account,
            token_program: spl_token::ID,
        }
        .to_account_metas(None),
        data: sea_option::instruction::BuyOption { lot_size: lots }.data(),
    }
}

pub fn settle_expiry(
    program_id: &Pubkey,
    authority: &Pubkey,
    market: &Pubkey,
    expiry_price: u64,
) -> Instruction {
    let (config, _) = find_config_pda(program_id);
    Instruction {
        program_id: *program_id,
        accounts: sea_option::accounts::SettleExpiry {
            authority: *authority,
            config,
            market: *market,
        }
        .to_account_metas(None),
        data: sea_option::instruction::SettleExpiry { expiry_price }.data(),
    }
}

pub fn redeem(
    program_id: &Pubkey,
    redeemer: &Pubkey,
    market: &MarketAccounts,
    redeemer_account: &Pubkey,
    option_note_account: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: sea_option::accounts::Redeem {
            redeemer: *redeemer,
            market: market.market,
            base_mint: market.base_mint,
            collateral_mint: market.collateral_mint,
            option_note_mint: market.option_note_mint,
            vault: market.vault,
            redeemer_account: *redeemer_account,
            option_note_account: *option_note_account,
            token_program: spl_token::ID,
        }
        .to_account_metas(None),
        data: sea_option::instruction::Redeem {}.data(),
    }
}
