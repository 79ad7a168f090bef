#![allow(dead_code)]

use anchor_lang::prelude::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::*;
use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program, sysvar,
    transaction::{Transaction, TransactionError},
};

use sea_option::{
    OptionMarket, ProgramConfig, SeaOptionError, CONFIG_SEED, MARKET_SEED,
    OPTION_NOTE_MINT_SEED, VAULT_SEED,
};

pub const COLLATERAL_DECIMALS: u8 = 6;

// Anchor's generated entry ties the slice and account lifetimes together, which
// `processor!` cannot express. The account vector is leaked on purpose so it
// outlives the call; this only runs inside the test harness.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    sea_option::entry(program_id, accounts, data)
}

pub struct TestContext {
    pub context: ProgramTestContext,
    pub authority: Keypair,
}

/// Addresses and parameters of a market opened by a test
#[derive(Debug, Clone, Copy)]
pub struct MarketFixture {
    pub base_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub market: Pubkey,
    pub option_note_mint: Pubkey,
    pub vault: Pubkey,
    pub strike_price: u64,
    pub premium_per_lot: u64,
    pub expiry_timestamp: i64,
    pub is_put: bool,
}

pub struct MarketParams {
    pub strike_price: u64,
    pub expiry_timestamp: i64,
    pub is_put: bool,
    pub lot_size: u64,
    pub premium_per_lot: u64,
}

impl TestContext {
    pub async fn new() -> Self {
        let program_test = ProgramTest::new(
            "sea_option",
            sea_option::ID,
            processor!(process_instruction),
        );
        let context = program_test.start_with_context().await;
        let authority = context.payer.insecure_clone();

        Self { context, authority }
    }

    /// Context whose program config is already initialized
    pub async fn initialized() -> Self {
        let mut ctx = Self::new().await;
        ctx.initialize().await.unwrap();
        ctx
    }

    pub fn payer(&self) -> Keypair {
        self.context.payer.insecure_clone()
    }

    pub async fn send_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self
            .context
            .get_new_latest_blockhash()
            .await
            .map_err(BanksClientError::from)?;
        let payer = self.payer();
        let mut all_signers: Vec<&Keypair> = vec![&payer];
        all_signers.extend(signers.iter().copied().filter(|k| k.pubkey() != payer.pubkey()));

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &all_signers,
            blockhash,
        );
        self.context.banks_client.process_transaction(tx).await
    }

    // ================================
    // Clock
    // ================================

    pub async fn now(&mut self) -> i64 {
        let clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp
    }

    pub async fn warp_to_timestamp(&mut self, unix_timestamp: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp = unix_timestamp;
        self.context.set_sysvar(&clock);
    }

    // ================================
    // SPL Token helpers
    // ================================

    pub async fn create_mint(&mut self, decimals: u8) -> Pubkey {
        let mint = Keypair::new();
        let payer = self.payer();
        let rent = self.context.banks_client.get_rent().await.unwrap();

        let ixs = [
            system_instruction::create_account(
                &payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                &payer.pubkey(),
                None,
                decimals,
            )
            .unwrap(),
        ];
        self.send_transaction(&ixs, &[&mint]).await.unwrap();
        mint.pubkey()
    }

    pub async fn create_token_account(&mut self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        let account = Keypair::new();
        let payer = self.payer();
        let rent = self.context.banks_client.get_rent().await.unwrap();

        let ixs = [
            system_instruction::create_account(
                &payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account3(
                &spl_token::id(),
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ];
        self.send_transaction(&ixs, &[&account]).await.unwrap();
        account.pubkey()
    }

    /// Mint `amount` of a payer-controlled mint into `account`
    pub async fn mint_tokens(&mut self, mint: &Pubkey, account: &Pubkey, amount: u64) {
        let payer = self.payer();
        let ix = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            account,
            &payer.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        self.send_transaction(&[ix], &[]).await.unwrap();
    }

    pub async fn token_balance(&mut self, account: &Pubkey) -> u64 {
        let data = self
            .context
            .banks_client
            .get_account(*account)
            .await
            .unwrap()
            .expect("token account missing");
        spl_token::state::Account::unpack(&data.data).unwrap().amount
    }

    pub async fn mint_supply(&mut self, mint: &Pubkey) -> u64 {
        let data = self
            .context
            .banks_client
            .get_account(*mint)
            .await
            .unwrap()
            .expect("mint missing");
        spl_token::state::Mint::unpack(&data.data).unwrap().supply
    }

    /// Funded collateral account plus an empty note account for a new buyer
    pub async fn new_buyer(&mut self, fixture: &MarketFixture, collateral: u64) -> Buyer {
        let keypair = Keypair::new();
        let collateral_account = self
            .create_token_account(&fixture.collateral_mint, &keypair.pubkey())
            .await;
        let note_account = self
            .create_token_account(&fixture.option_note_mint, &keypair.pubkey())
            .await;
        if collateral > 0 {
            self.mint_tokens(&fixture.collateral_mint, &collateral_account, collateral)
                .await;
        }
        Buyer {
            keypair,
            collateral_account,
            note_account,
        }
    }

    // ================================
    // Program accounts
    // ================================

    pub async fn fetch_config(&mut self) -> ProgramConfig {
        let account = self
            .context
            .banks_client
            .get_account(config_pda())
            .await
            .unwrap()
            .expect("config account missing");
        ProgramConfig::try_deserialize(&mut account.data.as_ref()).unwrap()
    }

    pub async fn fetch_market(&mut self, market: &Pubkey) -> OptionMarket {
        let account = self
            .context
            .banks_client
            .get_account(*market)
            .await
            .unwrap()
            .expect("market account missing");
        OptionMarket::try_deserialize(&mut account.data.as_ref()).unwrap()
    }

    // ================================
    // Program instructions
    // ================================

    pub async fn initialize(&mut self) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        let ix = initialize_ix(&authority.pubkey());
        self.send_transaction(&[ix], &[&authority]).await
    }

    pub async fn open_market(&mut self, params: MarketParams) -> Result<MarketFixture, BanksClientError> {
        let base_mint = self.create_mint(9).await;
        let collateral_mint = self.create_mint(COLLATERAL_DECIMALS).await;
        self.open_market_for(base_mint, collateral_mint, params).await
    }

    pub async fn open_market_for(
        &mut self,
        base_mint: Pubkey,
        collateral_mint: Pubkey,
        params: MarketParams,
    ) -> Result<MarketFixture, BanksClientError> {
        let payer = self.payer();
        let market = market_pda(&base_mint, &collateral_mint, params.expiry_timestamp);
        let option_note_mint = option_note_mint_pda(&market);
        let vault = vault_pda(&market);

        let ix = Instruction {
            program_id: sea_option::ID,
            accounts: sea_option::accounts::InitOption {
                payer: payer.pubkey(),
                config: config_pda(),
                market,
                base_mint,
                collateral_mint,
                option_note_mint,
                vault,
                system_program: system_program::ID,
                token_program: spl_token::id(),
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
        self.send_transaction(&[ix], &[]).await?;

        Ok(MarketFixture {
            base_mint,
            collateral_mint,
            market,
            option_note_mint,
            vault,
            strike_price: params.strike_price,
            premium_per_lot: params.premium_per_lot,
            expiry_timestamp: params.expiry_timestamp,
            is_put: params.is_put,
        })
    }

    pub async fn buy_option(
        &mut self,
        fixture: &MarketFixture,
        buyer: &Buyer,
        lots: u64,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: sea_option::ID,
            accounts: sea_option::accounts::BuyOption {
                depositor: buyer.keypair.pubkey(),
                market: fixture.market,
                base_mint: fixture.base_mint,
                collateral_mint: fixture.collateral_mint,
                option_note_mint: fixture.option_note_mint,
                vault: fixture.vault,
                option_note_account: buyer.note_account,
                collateral_account: buyer.collateral_account,
                token_program: spl_token::id(),
            }
            .to_account_metas(None),
            data: sea_option::instruction::BuyOption { lot_size: lots }.data(),
        };
        let signer = buyer.keypair.insecure_clone();
        self.send_transaction(&[ix], &[&signer]).await
    }

    pub async fn settle_expiry(
        &mut self,
        fixture: &MarketFixture,
        authority: &Keypair,
        expiry_price: u64,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: sea_option::ID,
            accounts: sea_option::accounts::SettleExpiry {
                authority: authority.pubkey(),
                config: config_pda(),
                market: fixture.market,
            }
            .to_account_metas(None),
            data: sea_option::instruction::SettleExpiry { expiry_price }.data(),
        };
        self.send_transaction(&[ix], &[authority]).await
    }

    pub async fn redeem(
        &mut self,
        fixture: &MarketFixture,
        buyer: &Buyer,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: sea_option::ID,
            accounts: sea_option::accounts::Redeem {
                redeemer: buyer.keypair.pubkey(),
                market: fixture.market,
                base_mint: fixture.base_mint,
                collateral_mint: fixture.collateral_mint,
                option_note_mint: fixture.option_note_mint,
                vault: fixture.vault,
                redeemer_account: buyer.collateral_account,
                option_note_account: buyer.note_account,
                token_program: spl_token::id(),
            }
            .to_account_metas(None),
            data: sea_option::instruction::Redeem {}.data(),
        };
        let signer = buyer.keypair.insecure_clone();
        self.send_transaction(&[ix], &[&signer]).await
    }
}

pub struct Buyer {
    pub keypair: Keypair,
    pub collateral_account: Pubkey,
    pub note_account: Pubkey,
}

// ================================
// PDA helpers
// ================================

pub fn config_pda() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED], &sea_option::ID).0
}

pub fn market_pda(base_mint: &Pubkey, collateral_mint: &Pubkey, expiry_timestamp: i64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            MARKET_SEED,
            base_mint.as_ref(),
            collateral_mint.as_ref(),
            &expiry_timestamp.to_le_bytes(),
        ],
        &sea_option::ID,
    )
    .0
}

pub fn option_note_mint_pda(market: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[OPTION_NOTE_MINT_SEED, market.as_ref()], &sea_option::ID).0
}

pub fn vault_pda(market: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_SEED, market.as_ref()], &sea_option::ID).0
}

pub fn initialize_ix(authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: sea_option::ID,
        accounts: sea_option::accounts::Initialize {
            authority: *authority,
            config: config_pda(),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: sea_option::instruction::Initialize {}.data(),
    }
}

// ================================
// Assertions
// ================================

pub fn assert_program_error(result: Result<(), BanksClientError>, expected: SeaOptionError) {
    let code = expected as u32 + anchor_lang::error::ERROR_CODE_OFFSET;
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(actual),
        ))) => assert_eq!(actual, code, "expected {expected:?}"),
        Err(BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, InstructionError::Custom(actual)),
            ..
        }) => assert_eq!(actual, code, "expected {expected:?}"),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
