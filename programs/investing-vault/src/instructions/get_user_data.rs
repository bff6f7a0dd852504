use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

/// Snapshot of a user's position as of its last settlement
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserData {
    pub principal: u64,
    pub claimable_reward: u64,
    pub reward_checkpoint: i64,
}

/// Read a user's position without mutating it
///
/// Returns the stored values; rewards accrued since the last settlement are
/// not folded in (they materialize on the next deposit/withdraw/claim).
#[derive(Accounts)]
pub struct GetUserData<'info> {
    /// Vault state PDA
    pub vault_state: Account<'info, VaultState>,

    /// Address whose position is being read; any address, no signature
    /// CHECK: Only used for position PDA derivation
    pub user: UncheckedAccount<'info>,

    /// Per-user position PDA
    /// Security: Seeds bind it to this vault and the given user
    #[account(
        seeds = [USER_POSITION_SEED, vault_state.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
    )]
    pub user_position: Account<'info, UserPosition>,
}

pub fn handler(ctx: Context<GetUserData>) -> Result<UserData> {
    let position = &ctx.accounts.user_position;

    Ok(UserData {
        principal: position.principal,
        claimable_reward: position.claimable_reward,
        reward_checkpoint: position.reward_checkpoint,
    })
}
