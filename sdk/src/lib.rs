//! Sea Option Rust SDK
//!
//! Thin client layer over the `sea_option` program:
//! - PDA derivation for configs, markets, vaults and note mints
//! - Instruction builders for every program instruction
//! - An async RPC client that signs, sends and confirms transactions
//! - Serializable views of on-chain accounts

pub mod addresses;
pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod types;

pub use addresses::*;
pub use client::SeaOptionClient;
pub use config::*;
pub use error::*;
pub use instructions::{InitOptionParams, MarketAccounts};
pub use types::*;

// Program types callers need alongside the SDK
pub use sea_option::{OptionMarket, ProgramConfig, NOTE_DECIMALS, NOTE_UNITS_PER_LOT};

pub use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
