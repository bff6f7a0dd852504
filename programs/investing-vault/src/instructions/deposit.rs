use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Deposit assets into the vault
///
/// During the enrollment/lock window any address may deposit; afterwards
/// only existing depositors may top up. The user's position account is
/// created lazily on the first successful deposit and never closed.
///
/// Security checklist:
/// - SIGNER VALIDATION: User must be signer
/// - ACCOUNT OWNERSHIP: Vault state and position PDAs validated with seeds
/// - MATH SAFETY: Checked operations, rewards settled before principal changes
/// - TOKEN ACCOUNT VALIDATION: Validates mint and owner
/// - BUSINESS LOGIC: Checks-effects-interactions pattern
/// - EVENTS: Emits InvestUpdated with the resulting principal
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// User depositing assets
    /// Security: Must be signer, pays for lazy position creation
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

    /// Per-user position PDA, created on first deposit
    /// Security: Seeds bind it to this vault and this user
    #[account(
        init_if_needed,
        payer = user,
        space = USER_POSITION_SIZE,
        seeds = [USER_POSITION_SEED, vault_state.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_position: Account<'info, UserPosition>,

    /// User's asset token account (source)
    /// Security: Must be owned by user and correct mint
    #[account(
        mut,
        constraint = user_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ VaultError::InvalidOwner,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Vault authority PDA
    /// Security: CHECK constraint, validated by seeds
    /// CHECK: PDA used as token authority, validated by seeds
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Vault's token account (destination)
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

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &mut ctx.accounts.vault_state;
    let position = &mut ctx.accounts.user_position;

    // Freshly created position: bind it before any accounting
    if position.user == Pubkey::default() {
        position.vault = vault_state.key();
        position.user = ctx.accounts.user.key();
        position.reward_checkpoint = now;
        position.bump = ctx.bumps.user_position;
    }

    // CHECKS: Minimum amount and lock-window phase
    vault_state.check_deposit(now, position.principal, amount)?;

    // EFFECTS: Settle rewards up to now, then credit principal.
    // Settlement first so the new funds earn nothing retroactively.
    position.settle(vault_state, now)?;

    position.principal = position
        .principal
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    vault_state.total_principal = vault_state
        .total_principal
        .checked_add(amount)
        .ok_or(VaultError::MathOverflow)?;

    // INTERACTIONS: Pull assets from user into the vault
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.user_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
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
