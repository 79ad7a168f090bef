use anchor_lang::prelude::*;

#[error_code]
pub enum SeaOptionError {
    #[msg("In-sufficent balance")]
    InsufficientBalance,

    #[msg("Price Error")]
    InvalidPrice,

    #[msg("Invalid option token")]
    InvalidOptionToken,

    #[msg("Expiry price not found")]
    ExpiryPriceNotFound,

    #[msg("Strike price must be greater than zero")]
    InvalidStrikePrice,

    #[msg("Premium per lot must be greater than zero")]
    InvalidPremium,

    #[msg("Lot size must be greater than zero")]
    InvalidLotSize,

    #[msg("Expiry timestamp must be in the future")]
    ExpiryInPast,

    #[msg("Base and collateral mints must differ")]
    IdenticalMints,

    #[msg("Market has expired")]
    MarketExpired,

    #[msg("Market has not expired yet")]
    MarketNotExpired,

    #[msg("Unauthorized: only the settlement authority can settle expiries")]
    UnauthorizedSettlement,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Token mint does not match the market")]
    MintMismatch,

    #[msg("Vault does not match the market")]
    VaultMismatch,

    #[msg("Token account owner does not match the signer")]
    OwnerMismatch,
}
