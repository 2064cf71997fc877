use anchor_lang::prelude::*;

#[error_code]
pub enum SurveyAirdropError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    Unauthorized,

    // Claim gating errors
    #[msg("Airdrop is paused")]
    Paused,
    #[msg("Address is not eligible for a reward")]
    NotEligible,

    // Balance errors
    #[msg("Airdrop holds no balance of this token")]
    NoBalance,
    #[msg("Insufficient airdrop balance to pay the reward")]
    TransferFailed,

    // Configuration errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Token mint does not match airdrop's reward token")]
    TokenMintMismatch,
    #[msg("Reward mint has a transfer fee or transfer hook")]
    UnsupportedMint,
    #[msg("Owner token account is required for a deposit")]
    MissingTokenAccount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
