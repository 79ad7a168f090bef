//! Sea Option CLI Tool
//!
//! A command-line interface for opening, trading and settling option markets
//! using the Sea Option Rust SDK.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sea_option_sdk::*;
use solana_sdk::commitment_config::CommitmentConfig;

#[derive(Parser)]
#[command(name = "sea-option")]
#[command(about = "A command-line interface for Sea Option markets")]
#[command(version)]
struct Cli {
    /// RPC endpoint URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to keypair file
    #[arg(long)]
    keypair: Option<String>,

    /// Commitment level
    #[arg(long, value_enum)]
    commitment: Option<Commitment>,

    /// Program ID of the deployed sea_option program
    #[arg(long)]
    program_id: Option<Pubkey>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Call,
    Put,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the program config; the signer becomes settlement authority
    Initialize,
    /// Open a market for a base/collateral pair
    InitOption {
        #[arg(long)]
        base_mint: Pubkey,
        #[arg(long)]
        collateral_mint: Pubkey,
        /// Strike price in collateral base units
        #[arg(long)]
        strike: u64,
        /// Expiry as a unix timestamp
        #[arg(long)]
        expiry: i64,
        #[arg(long, value_enum, default_value_t = Kind::Call)]
        kind: Kind,
        #[arg(long, default_value = "1")]
        lot_size: u64,
        /// Premium per lot in collateral base units
        #[arg(long)]
        premium: u64,
    },
    /// Buy lots of a market
    Buy {
        market: Pubkey,
        #[arg(long, default_value = "1")]
        lots: u64,
    },
    /// Record the expiry price of a market
    Settle {
        market: Pubkey,
        #[arg(long)]
        price: u64,
    },
    /// Redeem all notes held for a market
    Redeem { market: Pubkey },
    /// Print a market as JSON
    ShowMarket { market: Pubkey },
    /// Print the program config as JSON
    ShowConfig,
    /// Print the addresses of a market without touching the network
    Derive {
        #[arg(long)]
        base_mint: Pubkey,
        #[arg(long)]
        collateral_mint: Pubkey,
        #[arg(long)]
        expiry: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = create_config(&cli)?;

    match cli.command {
        Commands::Initialize => {
            let signature = connect(config)?.initialize().await?;
            println!("✅ Program initialized: {signature}");
        }
        Commands::InitOption {
            base_mint,
            collateral_mint,
            strike,
            expiry,
            kind,
            lot_size,
            premium,
        } => {
            if base_mint == collateral_mint {
                bail!("base and collateral mints must differ");
            }
            let params = InitOptionParams {
                base_mint,
                collateral_mint,
                strike_price: strike,
                expiry_timestamp: expiry,
                is_put: matches!(kind, Kind::Put),
                lot_size,
                premium_per_lot: premium,
            };
            let (signature, accounts) = connect(config)?.init_option(&params).await?;
            println!("✅ Market opened: {}", accounts.market);
            println!("   Note mint: {}", accounts.option_note_mint);
            println!("   Vault: {}", accounts.vault);
            println!("   Signature: {signature}");
        }
        Commands::Buy { market, lots } => {
            let signature = connect(config)?.buy_option(&market, lots).await?;
            println!("✅ Bought {lots} lot(s): {signature}");
        }
        Commands::Settle { market, price } => {
            let signature = connect(config)?.settle_expiry(&market, price).await?;
            println!("✅ Market settled: {signature}");
        }
        Commands::Redeem { market } => {
            let signature = connect(config)?.redeem(&market).await?;
            println!("✅ Notes redeemed: {signature}");
        }
        Commands::ShowMarket { market } => {
            let state = connect(config)?.fetch_market(&market).await?;
            let info = MarketInfo::from_state(&market, &state);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::ShowConfig => {
            let (address, state) = connect(config)?.fetch_config().await?;
            let info = ConfigInfo::from_state(&address, &state);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Derive {
            base_mint,
            collateral_mint,
            expiry,
        } => {
            let addresses =
                MarketAddresses::derive(&config.program_id, &base_mint, &collateral_mint, expiry);
            let (config_pda, _) = find_config_pda(&config.program_id);
            let json = serde_json::json!({
                "config": config_pda.to_string(),
                "market": addresses.market.to_string(),
                "option_note_mint": addresses.option_note_mint.to_string(),
                "vault": addresses.vault.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn connect(config: SdkConfig) -> Result<SeaOptionClient> {
    SeaOptionClient::new(config)
        .context("failed to create client; check --keypair or SEA_OPTION_KEYPAIR")
}

/// Defaults, then environment, then command-line flags
fn create_config(cli: &Cli) -> Result<SdkConfig> {
    let mut config = SdkConfig::from_env().context("invalid SEA_OPTION_* environment")?;

    if let Some(rpc_url) = &cli.rpc_url {
        config.rpc_url = rpc_url.clone();
    }
    if let Some(keypair) = &cli.keypair {
        config.keypair_path = keypair.clone();
    }
    if let Some(commitment) = cli.commitment {
        config.commitment = commitment.into();
    }
    if let Some(program_id) = cli.program_id {
        config.program_id = program_id;
    }

    Ok(config)
}
