//! Error types for the Sea Option SDK

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeaOptionSdkError {
    #[error("Invalid SDK configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid keypair file {path}: {reason}")]
    InvalidKeypair { path: String, reason: String },

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Invalid account data for {0}")]
    InvalidAccountData(String),

    #[error("Anchor error: {0}")]
    AnchorError(#[from] anchor_lang::error::Error),

    #[error("Solana client error: {0}")]
    SolanaClientError(#[from] solana_client::client_error::ClientError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type SdkResult<T> = std::result::Result<T, SeaOptionSdkError>;
