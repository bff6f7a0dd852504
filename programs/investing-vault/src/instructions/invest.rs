use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Move pooled funds out to an external token account for off-protocol
/// deployment
///
/// Authority-only. Tracks the outstanding amount in `custody_out` without
/// touching any user position: custody movement is decoupled from the
/// accounting ledger that determines withdrawal entitlement. No cap against
/// `total_principal` is enforced here; the authority is trusted.
#[derive(Accounts)]
pub struct Invest<'info> {
    /// Vault authority - only they can move funds out
    /// Security: Must be signer and match vault_state.authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Vault state PDA
    /// Security: has_one constraint validates authority from state
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_state.asset_mint.as_ref()],
        bump = vault_state.bump,
        has_one = authority @ VaultError::Unauthorized,
    )]
    pub vault_state: Account<'info, VaultState>,

    /// Vault authority PDA
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

    /// External target token account (destination)
    /// Security: Must hold the vault's asset mint
    #[account(
        mut,
        constraint = target_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
    )]
    pub target_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Invest>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &mut ctx.accounts.vault_state;
    let target = ctx.accounts.target_token_account.key();

    // EFFECTS: Track outstanding custody before the transfer
    vault_state.custody_take(amount)?;

    // INTERACTIONS: Transfer from vault to target, signed by the vault PDA
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
            to: ctx.accounts.target_token_account.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("invested {} to {}", amount, target);

    emit!(Invested {
        vault: vault_state.key(),
        authority: ctx.accounts.authority.key(),
        target,
        amount,
        custody_out: vault_state.custody_out,
        timestamp: now,
    });

    Ok(())
}
