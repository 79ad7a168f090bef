// ================================
// PDA Seeds
// ================================

/// Seed for the singleton program config
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for option markets
pub const MARKET_SEED: &[u8] = b"market";

/// Seed prefix for a market's option note mint
pub const OPTION_NOTE_MINT_SEED: &[u8] = b"option_note_mint";

/// Seed prefix for a market's collateral vault
pub const VAULT_SEED: &[u8] = b"vault";

// ================================
// Option Notes
// ================================

/// Decimals of every option note mint
pub const NOTE_DECIMALS: u8 = 9;

/// Note base units representing one lot (one whole note)
pub const NOTE_UNITS_PER_LOT: u64 = 1_000_000_000;
