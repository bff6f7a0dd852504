use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::*, state::*};

/// Initialize a new investing vault for a given asset token
///
/// The deployment timestamp recorded here anchors the enrollment/lock
/// window; the lock duration itself is a compiled-in constant.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Vault authority - can move pooled funds out and back in
    /// Security: Must be signer, stored in state
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Vault state PDA
    /// Security: Initialized with proper space and padding for upgrades
    #[account(
        init,
        payer = authority,
        space = VAULT_STATE_SIZE,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Asset token mint (the token users deposit)
    /// Security: No constraints needed - any valid mint can have a vault
    pub asset_mint: Account<'info, Mint>,

    /// Vault authority PDA - signs outbound token transfers
    /// Security: CHECK constraint ensures correct derivation
    /// CHECK: PDA used as token authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, asset_mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's token account for holding pooled deposits
    /// Security: Owned by vault_authority PDA, correct mint
    #[account(
        init,
        payer = authority,
        associated_token::mint = asset_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, min_deposit: u64, reward_rate: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Initialize vault state
    vault_state.authority = ctx.accounts.authority.key();
    vault_state.asset_mint = ctx.accounts.asset_mint.key();
    vault_state.min_deposit = min_deposit;
    vault_state.reward_rate = reward_rate;
    vault_state.deployment_timestamp = now;
    vault_state.total_principal = 0;
    vault_state.custody_out = 0;
    vault_state.bump = ctx.bumps.vault_state;
    vault_state.authority_bump = ctx.bumps.vault_authority;
    vault_state._reserved = [0; 128];

    emit!(VaultInitialized {
        vault: vault_state.key(),
        authority: vault_state.authority,
        asset_mint: vault_state.asset_mint,
        min_deposit,
        reward_rate,
        timestamp: now,
    });

    Ok(())
}
