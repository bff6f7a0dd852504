use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Withdraw principal from the vault
///
/// Rejected vault-wide until the lock window elapses; afterwards capped at
/// the caller's principal. The position account is created if missing so a
/// caller who never deposited fails the principal check with NotAvailable
/// rather than a raw missing-account error (the whole transaction rolls
/// back, so no empty position persists).
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// User withdrawing principal
    /// Security: Must be signer
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault state PDA
    /// Security: Validated by seeds, holds config and totals
    #[account(
        mut,
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

    /// Vault authority PDA, signs the outbound transfer
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

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &mut ctx.accounts.vault_state;
    let position = &mut ctx.accounts.user_position;

    // CHECKS: Lock window and principal cap
    vault_state.check_withdraw(now, position.principal, amount)?;

    // EFFECTS: Settle rewards first so the withdrawn funds earned their
    // share up to this instant and stop earning from here on.
    position.settle(vault_state, now)?;

    position.principal = position
        .principal
        .checked_sub(amount)
        .ok_or(VaultError::MathOverflow)?;

    vault_state.total_principal = vault_state
        .total_principal
        .checked_sub(amount)
        .ok_or(VaultError::MathOverflow)?;

    // INTERACTIONS: Push assets back to the user, signed by the vault PDA
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

    emit!(InvestUpdated {
        vault: vault_state.key(),
        user: ctx.accounts.user.key(),
        new_principal: position.principal,
        timestamp: now,
    });

    Ok(())
}
