use anchor_lang::prelude::*;

/// Custom error codes for the Investing Vault program
///
/// Every rejected call aborts atomically with one of these codes and no
/// partial state change.
#[error_code]
pub enum VaultError {
    #[msg("Deposit amount is below the configured minimum")]
    TooSmallAmount,

    #[msg("Operation not available - lock window, closed enrollment, or insufficient principal")]
    NotAvailable,

    #[msg("Unauthorized - only the vault authority can perform this action")]
    Unauthorized,

    #[msg("No accrued reward to claim")]
    NoReward,

    #[msg("Math overflow occurred during calculation")]
    MathOverflow,

    #[msg("Invalid token mint - does not match vault asset")]
    InvalidMint,

    #[msg("Invalid token account owner")]
    InvalidOwner,
}
