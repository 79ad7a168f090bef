//! Async RPC client for the Sea Option program

use anchor_lang::AccountDeserialize;
use log::{debug, info};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};

use sea_option::{OptionMarket, ProgramConfig};

use crate::{
    addresses::find_config_pda,
    config::SdkConfig,
    error::{SdkResult, SeaOptionSdkError},
    instructions::{self, InitOptionParams, MarketAccounts},
};

pub struct SeaOptionClient {
    rpc: RpcClient,
    payer: Keypair,
    program_id: Pubkey,
}

impl SeaOptionClient {
    /// Connect using `config`, loading the payer from its keypair path
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        let payer = config.load_payer()?;
        Ok(Self::with_payer(config, payer))
    }

    pub fn with_payer(config: SdkConfig, payer: Keypair) -> Self {
        debug!(
            "connecting to {} for program {}",
            config.rpc_url, config.program_id
        );
        let rpc = RpcClient::new_with_commitment(config.rpc_url, config.commitment);
        Self::with_rpc(rpc, payer, config.program_id)
    }

    /// Wrap an already constructed RPC client
    pub fn with_rpc(rpc: RpcClient, payer: Keypair, program_id: Pubkey) -> Self {
        Self {
            rpc,
            payer,
            program_id,
        }
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Sign with the payer, send and confirm
    pub async fn send(&self, instructions: &[Instruction]) -> SdkResult<Signature> {
        let blockhash = self.rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            &[&self.payer],
            blockhash,
        );
        let signature = self.rpc.send_and_confirm_transaction(&tx).await?;
        info!("transaction signature: {signature}");
        Ok(signature)
    }

    // ================================
    // Instructions
    // ================================

    /// Create the program config with the payer as settlement authority
    pub async fn initialize(&self) -> SdkResult<Signature> {
        let ix = instructions::initialize(&self.program_id, &self.payer.pubkey());
        self.send(&[ix]).await
    }

    pub async fn init_option(
        &self,
        params: &InitOptionParams,
    ) -> SdkResult<(Signature, MarketAccounts)> {
        let (ix, accounts) = instructions::init_option(&self.program_id, &self.payer.pubkey(), params);
        info!("opening market {}", accounts.market);
        let signature = self.send(&[ix]).await?;
        Ok((signature, accounts))
    }

    /// Buy `lots` lots, paying from the payer's collateral ATA
    ///
    /// The payer's note ATA is created first when missing.
    pub async fn buy_option(&self, market: &Pubkey, lots: u64) -> SdkResult<Signature> {
        let state = self.fetch_market(market).await?;
        let accounts = MarketAccounts::from_state(*market, &state);
        let owner = self.payer.pubkey();

        let note_account = get_associated_token_address(&owner, &accounts.option_note_mint);
        let collateral_account = get_associated_token_address(&owner, &accounts.collateral_mint);

        let ixs = [
            create_associated_token_account_idempotent(
                &owner,
                &owner,
                &accounts.option_note_mint,
                &spl_token::ID,
            ),
            instructions::buy_option(
                &self.program_id,
                &owner,
                &accounts,
                &note_account,
                &collateral_account,
                lots,
            ),
        ];
        info!("buying {lots} lot(s) of {market}");
        self.send(&ixs).await
    }

    pub async fn settle_expiry(&self, market: &Pubkey, expiry_price: u64) -> SdkResult<Signature> {
        let ix = instructions::settle_expiry(
            &self.program_id,
            &self.payer.pubkey(),
            market,
            expiry_price,
        );
        info!("settling {market} at {expiry_price}");
        self.send(&[ix]).await
    }

    /// Redeem every note the payer holds for `market`
    pub async fn redeem(&self, market: &Pubkey) -> SdkResult<Signature> {
        let state = self.fetch_market(market).await?;
        let accounts = MarketAccounts::from_state(*market, &state);
        let owner = self.payer.pubkey();

        let note_account = get_associated_token_address(&owner, &accounts.option_note_mint);
        let collateral_account = get_associated_token_address(&owner, &accounts.collateral_mint);

        let ixs = [
            create_associated_token_account_idempotent(
                &owner,
                &owner,
                &accounts.collateral_mint,
                &spl_token::ID,
            ),
            instructions::redeem(
                &self.program_id,
                &owner,
                &accounts,
                &collateral_account,
                &note_account,
            ),
        ];
        info!("redeeming notes of {market}");
        self.send(&ixs).await
    }

    // ================================
    // Account queries
    // ================================

    pub async fn fetch_config(&self) -> SdkResult<(Pubkey, ProgramConfig)> {
        let (address, _) = find_config_pda(&self.program_id);
        let config = self.fetch_account(&address, "program config").await?;
        Ok((address, config))
    }

    pub async fn fetch_market(&self, market: &Pubkey) -> SdkResult<OptionMarket> {
        self.fetch_account(market, "option market").await
    }

    async fn fetch_account<T: AccountDeserialize>(
        &self,
        address: &Pubkey,
        label: &str,
    ) -> SdkResult<T> {
        let account = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await?
            .value
            .ok_or_else(|| SeaOptionSdkError::AccountNotFound(format!("{label} {address}")))?;

        if account.owner != self.program_id {
            return Err(SeaOptionSdkError::InvalidAccountData(format!(
                "{label} {address} is owned by {}",
                account.owner
            )));
        }

        Ok(T::try_deserialize(&mut account.data.as_slice())?)
    }
}
