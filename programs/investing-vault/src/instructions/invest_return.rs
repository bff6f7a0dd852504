use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

/// Return previously invested funds from the authority back into the vault
///
/// Authority-only. `custody_out` is decremented and clamped at zero, so
/// returning more than was taken out never underflows into a phantom
/// credit balance.
#[derive(Accounts)]
pub struct InvestReturn<'info> {
    /// Vault authority returning funds
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

    /// Authority's token account (source)
    /// Security: Must be owned by the authority and correct mint
    #[account(
        mut,
        constraint = authority_token_account.mint == vault_state.asset_mint @ VaultError::InvalidMint,
        constraint = authority_token_account.owner == authority.key() @ VaultError::InvalidOwner,
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

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
}

pub fn handler(ctx: Context<InvestReturn>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_state = &mut ctx.accounts.vault_state;

    // EFFECTS: Reduce outstanding custody, clamped at zero
    vault_state.custody_return(amount);

    // INTERACTIONS: Transfer from the authority back into the vault
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.authority_token_account.to_account_info(),
            to: ctx.accounts.vault_token_account.to_account_info(),
            authority: ctx.accounts.authority.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)?;

    msg!("invest returned: {}", amount);

    emit!(InvestReturned {
        vault: vault_state.key(),
        authority: ctx.accounts.authority.key(),
        amount,
        custody_out: vault_state.custody_out,
        timestamp: now,
    });

    Ok(())
}
