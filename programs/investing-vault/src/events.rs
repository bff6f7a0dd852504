use anchor_lang::prelude::*;

/// Event emitted when a new vault is initialized
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub asset_mint: Pubkey,
    pub min_deposit: u64,
    pub reward_rate: u64,
    pub timestamp: i64,
}

/// Event emitted on every successful deposit or withdrawal.
/// Carries the account's resulting principal, not the delta.
#[event]
pub struct InvestUpdated {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub new_principal: u64,
    pub timestamp: i64,
}

/// Event emitted when a user claims accrued rewards
#[event]
pub struct RewardClaimed {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the authority moves pooled funds out for external deployment
#[event]
pub struct Invested {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub target: Pubkey,
    pub amount: u64,
    pub custody_out: u64,
    pub timestamp: i64,
}

/// Event emitted when the authority returns previously invested funds
#[event]
pub struct InvestReturned {
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub custody_out: u64,
    pub timestamp: i64,
}
