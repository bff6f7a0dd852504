// Investing Vault - time-locked deposit vault with reward accrual on Solana
// Users enroll during a lock window, accrue time-based rewards on principal,
// and withdraw once the window elapses. The vault authority may temporarily
// move pooled funds out for off-protocol deployment and return them later.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod investing_vault {
    use super::*;

    /// Initialize a new vault for a given asset token
    ///
    /// Records the deployment timestamp that anchors the enrollment/lock
    /// window. `min_deposit` and `reward_rate` are fixed for the vault's
    /// lifetime; the lock duration is a compiled-in constant.
    pub fn initialize(ctx: Context<Initialize>, min_deposit: u64, reward_rate: u64) -> Result<()> {
        instructions::initialize::handler(ctx, min_deposit, reward_rate)
    }

    /// Deposit assets into the vault
    ///
    /// Security considerations:
    /// - Enforces the per-call minimum deposit
    /// - Enforces the enrollment window for first-time depositors
    /// - Settles rewards before crediting principal
    /// - Follows checks-effects-interactions pattern
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw principal once the lock window has elapsed
    ///
    /// Security considerations:
    /// - Rejected vault-wide during the lock window
    /// - Capped at the caller's recorded principal
    /// - Settles rewards before debiting principal
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claim all accrued rewards
    ///
    /// Settles up to the current time and pays out the full claimable
    /// balance; a zero-value claim is rejected.
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward::handler(ctx)
    }

    /// Move pooled funds out to an external token account
    ///
    /// Security considerations:
    /// - Authority-only function (has_one constraint)
    /// - Tracks outstanding custody separately from user accounting
    /// - Emits event for transparency
    pub fn invest(ctx: Context<Invest>, amount: u64) -> Result<()> {
        instructions::invest::handler(ctx, amount)
    }

    /// Return previously invested funds into the vault
    ///
    /// Security considerations:
    /// - Authority-only function
    /// - Outstanding custody clamped at zero on over-return
    pub fn invest_return(ctx: Context<InvestReturn>, amount: u64) -> Result<()> {
        instructions::invest_return::handler(ctx, amount)
    }

    /// Read a user's position as of its last settlement
    pub fn get_user_data(ctx: Context<GetUserData>) -> Result<UserData> {
        instructions::get_user_data::handler(ctx)
    }
}
