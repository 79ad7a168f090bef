//! Client configuration

use std::fs;

use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair};

use crate::error::{SdkResult, SeaOptionSdkError};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";
pub const DEFAULT_KEYPAIR_PATH: &str = "~/.config/solana/id.json";

pub const RPC_URL_ENV: &str = "SEA_OPTION_RPC_URL";
pub const KEYPAIR_ENV: &str = "SEA_OPTION_KEYPAIR";
pub const COMMITMENT_ENV: &str = "SEA_OPTION_COMMITMENT";
pub const PROGRAM_ID_ENV: &str = "SEA_OPTION_PROGRAM_ID";

#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Solana RPC URL
    pub rpc_url: String,

    /// Path of the signing keypair; `~` is expanded
    pub keypair_path: String,

    pub commitment: CommitmentConfig,

    /// Deployed `sea_option` program
    pub program_id: Pubkey,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            keypair_path: DEFAULT_KEYPAIR_PATH.to_string(),
            commitment: CommitmentConfig::confirmed(),
            program_id: sea_option::ID,
        }
    }
}

impl SdkConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rpc_url) = lookup(RPC_URL_ENV) {
            config.rpc_url = rpc_url;
        }
        if let Some(keypair_path) = lookup(KEYPAIR_ENV) {
            config.keypair_path = keypair_path;
        }
        if let Some(commitment) = lookup(COMMITMENT_ENV) {
            config.commitment = parse_commitment(&commitment)?;
        }
        if let Some(program_id) = lookup(PROGRAM_ID_ENV) {
            config.program_id = program_id.parse().map_err(|_| {
                SeaOptionSdkError::InvalidConfiguration(format!(
                    "{PROGRAM_ID_ENV} is not a valid pubkey: {program_id}"
                ))
            })?;
        }

        Ok(config)
    }

    pub fn load_payer(&self) -> SdkResult<Keypair> {
        load_keypair(&self.keypair_path)
    }
}

pub fn parse_commitment(value: &str) -> SdkResult<CommitmentConfig> {
    match value.to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(SeaOptionSdkError::InvalidConfiguration(format!(
            "unknown commitment level: {other}"
        ))),
    }
}

/// Load a keypair stored as a JSON byte array, the format `solana-keygen` writes
pub fn load_keypair(path: &str) -> SdkResult<Keypair> {
    let expanded_path = shellexpand::tilde(path);
    let contents = fs::read_to_string(expanded_path.as_ref())?;
    let bytes: Vec<u8> = serde_json::from_str(&contents)?;
    Keypair::try_from(&bytes[..]).map_err(|e| SeaOptionSdkError::InvalidKeypair {
        path: path.to_string(),
        reason: e.to_string(),
    })
}
