use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Claim all accrued rewards
///
/// Settles the position up to now, then pays out the full claimable
/// balance. A claim that would pay nothing is rejected with NoReward
/// rather than succeeding as a no-op. The position account is created if
/// missing so a caller who never deposited also fails with NoReward
/// rather than a raw missing-account error (the whole transaction rolls
/// back, so no empty position persists).
#[derive(Accounts)]
pub struct ClaimReward<'info> {
    /// User claiming rewards
    /// Security: Must be signer, pays for lazy position creation
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault state PDA
    /// Security: Validated by seeds
    #[account(
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Per-user position PDA
    /// Security: Seeds bind it to this vault and this user
    #[account(
        init_if_needed,
        payer = user,
        space = USER_POSITION_SIZE,
        seeds = [USER_POSITION_SEED, vault_state.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_position: Account<'info, UserPosition>,

    /// User's asset token account (destination)
    /// Security: Must be owned by user and correct mint
    #[account(
        mut,
        constraint = user_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault authority PDA, signs the payout
    /// Security: CHECK constraint, validated by seeds
    /// CHECK: PDA used as token authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's token account (source)
    /// Security: Must be correct mint and owned by vault_authority
    #[account(
        mut,
        constraint = vault_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = vault_token_account.owner == vault_authority.key() @ VaultError::InvalidOwner,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &ctx.accounts.vault_state;
    let position = &mut ctx.accounts.user_position;

    // Freshly created position: bind it before any accounting. Zero
    // principal and a checkpoint of now mean the NoReward check below
    // fires for a caller who never deposited.
    if position.user == Pubkey::default() {
        position.vault = vault_state.key();
        position.user = ctx.accounts.user.key();
        position.reward_checkpoint = now;
        position.bump = ctx.bumps.user_position;
    }

    // EFFECTS: Bring the reward balance up to date, then take all of it
    position.settle(vault_state, now)?;

    let amount = position.claimable_reward;
    require!(amount > 0, VaultError::NoReward);
    position.claimable_reward = 0;

    // INTERACTIONS: Pay out from the vault, signed by the vault PDA
    let asset_mint_key = vault_state.asset_mint;
    let authority_bump = vault_state.authority_bump;
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        asset_mint_key.as_ref(),
        &[authority_bump],
    ];
    let signer_seeds = &[&authority_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault_token_account.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("reward claimed: {}", amount);

    emit!(RewardClaimed {
        vault: vault_state.key(),
        user: ctx.accounts.user.key(),
        amount,
        timestamp: now,
    });

    Ok(())
}
