use anchor_lang::prelude::*;

use crate::constants::{LOCK_DURATION, RATE_SCALE, SECONDS_PER_YEAR};
use crate::errors::VaultError;

/// Global vault state: immutable configuration plus vault-wide totals
///
/// Security considerations:
/// - Authority stored in state (not instruction args)
/// - Totals tracked separately from actual token custody
/// - Bumps stored for efficient PDA signing
/// - 128 bytes padding for future upgrades
#[account]
pub struct VaultState {
    /// Authority that can move pooled funds out and back in
    pub authority: Pubkey,

    /// Mint of the deposited asset token
    pub asset_mint: Pubkey,

    /// Minimum amount accepted per deposit call
    pub min_deposit: u64,

    /// Per-annum yield rate, fixed point with RATE_SCALE (1e9 == 100% APY)
    pub reward_rate: u64,

    /// Timestamp the vault was initialized; anchors the lock window
    pub deployment_timestamp: i64,

    /// Sum of all user position principals
    pub total_principal: u64,

    /// Amount moved out via `invest` and not yet returned
    pub custody_out: u64,

    /// Bump seed for vault state PDA
    pub bump: u8,

    /// Bump seed for vault authority PDA
    pub authority_bump: u8,

    // Padding for future upgrades
    pub _reserved: [u8; 128],
}

/// Per-user accounting record
///
/// Created lazily on a user's first deposit and never closed, so reward and
/// claim history remains addressable even at zero principal.
#[account]
pub struct UserPosition {
    /// The vault this position belongs to
    pub vault: Pubkey,

    /// The user's wallet address
    pub user: Pubkey,

    /// Amount currently invested, excluding unclaimed rewards
    pub principal: u64,

    /// Timestamp of the last reward settlement for this position
    pub reward_checkpoint: i64,

    /// Reward accrued but not yet claimed
    pub claimable_reward: u64,

    /// Bump seed for the position PDA
    pub bump: u8,
}

impl VaultState {
    /// The instant enrollment closes and withdrawals open.
    /// These coincide: there is a single lock-window boundary.
    pub fn enrollment_deadline(&self) -> i64 {
        self.deployment_timestamp + LOCK_DURATION
    }

    /// Whether the vault is still inside the enrollment/lock window
    pub fn is_locked(&self, now: i64) -> bool {
        now < self.enrollment_deadline()
    }

    /// Validate a deposit against the minimum and the lock-window phase.
    ///
    /// During the lock window any address may deposit. Once enrollment
    /// closes, only addresses with existing non-zero principal may top up.
    /// The transition is one-way and re-evaluated from `now` on every call.
    pub fn check_deposit(&self, now: i64, existing_principal: u64, amount: u64) -> Result<()> {
        require!(amount >= self.min_deposit, VaultError::TooSmallAmount);
        if !self.is_locked(now) {
            require!(existing_principal > 0, VaultError::NotAvailable);
        }
        Ok(())
    }

    /// Validate a withdrawal: rejected vault-wide during the lock window,
    /// afterwards capped at the caller's principal. A zero-principal caller
    /// always fails here, never with a generic account error.
    pub fn check_withdraw(&self, now: i64, principal: u64, amount: u64) -> Result<()> {
        require!(!self.is_locked(now), VaultError::NotAvailable);
        require!(amount > 0 && amount <= principal, VaultError::NotAvailable);
        Ok(())
    }

    /// Record funds moved out for external deployment
    pub fn custody_take(&mut self, amount: u64) -> Result<()> {
        self.custody_out = self
            .custody_out
            .checked_add(amount)
            .ok_or(error!(VaultError::MathOverflow))?;
        Ok(())
    }

    /// Record returned funds. Clamped at zero: returning more than was
    /// taken out never underflows into a phantom credit balance.
    pub fn custody_return(&mut self, amount: u64) {
        self.custody_out = self.custody_out.saturating_sub(amount);
    }

    /// Reward accrued by `principal` over `elapsed` seconds at the vault rate.
    ///
    /// accrued = principal * reward_rate * elapsed / (RATE_SCALE * SECONDS_PER_YEAR)
    ///
    /// Security: u128 intermediates, checked math throughout
    pub fn accrued_reward(&self, principal: u64, elapsed: i64) -> Result<u64> {
        if principal == 0 || elapsed <= 0 {
            return Ok(0);
        }

        let numerator = (principal as u128)
            .checked_mul(self.reward_rate as u128)
            .ok_or(error!(VaultError::MathOverflow))?
            .checked_mul(elapsed as u128)
            .ok_or(error!(VaultError::MathOverflow))?;

        let denominator = (RATE_SCALE as u128) * (SECONDS_PER_YEAR as u128);

        u64::try_from(numerator / denominator).map_err(|_| error!(VaultError::MathOverflow))
    }
}

impl UserPosition {
    /// Settle accrued rewards up to `now` and advance the checkpoint.
    ///
    /// Must run before any principal change: newly deposited funds earn
    /// nothing retroactively, withdrawn funds stop earning immediately.
    /// Idempotent at a fixed `now`.
    pub fn settle(&mut self, vault: &VaultState, now: i64) -> Result<()> {
        let elapsed = now.saturating_sub(self.reward_checkpoint);
        let accrued = vault.accrued_reward(self.principal, elapsed)?;

        self.claimable_reward = self
            .claimable_reward
            .checked_add(accrued)
            .ok_or(error!(VaultError::MathOverflow))?;
        self.reward_checkpoint = now;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOCK_DURATION;

    const DAY: i64 = 24 * 60 * 60;
    const ONE: u64 = 1_000_000_000; // one whole token at 9 decimals

    fn mock_vault(deployed_at: i64) -> VaultState {
        VaultState {
            authority: Pubkey::default(),
            asset_mint: Pubkey::default(),
            min_deposit: 100 * ONE,
            reward_rate: RATE_SCALE, // 100% APY
            deployment_timestamp: deployed_at,
            total_principal: 0,
            custody_out: 0,
            bump: 0,
            authority_bump: 0,
            _reserved: [0; 128],
        }
    }

    fn mock_position(principal: u64, checkpoint: i64) -> UserPosition {
        UserPosition {
            vault: Pubkey::default(),
            user: Pubkey::default(),
            principal,
            reward_checkpoint: checkpoint,
            claimable_reward: 0,
            bump: 0,
        }
    }

    #[test]
    fn deposit_below_minimum_rejected() {
        let vault = mock_vault(0);
        assert_eq!(
            vault.check_deposit(0, 0, 50 * ONE),
            Err(VaultError::TooSmallAmount.into())
        );
    }

    #[test]
    fn minimum_applies_to_top_ups_too() {
        let vault = mock_vault(0);
        // Existing depositor, still below per-call minimum
        assert_eq!(
            vault.check_deposit(DAY, 100 * ONE, 50 * ONE),
            Err(VaultError::TooSmallAmount.into())
        );
    }

    #[test]
    fn anyone_may_deposit_during_lock_window() {
        let vault = mock_vault(0);
        assert!(vault.check_deposit(0, 0, 100 * ONE).is_ok());
        assert!(vault.check_deposit(LOCK_DURATION - 1, 0, 100 * ONE).is_ok());
    }

    #[test]
    fn enrollment_closes_at_deadline() {
        let vault = mock_vault(0);
        // Fresh address at the exact boundary is already too late
        assert_eq!(
            vault.check_deposit(LOCK_DURATION, 0, 1000 * ONE),
            Err(VaultError::NotAvailable.into())
        );
        // Existing depositor may still top up
        assert!(vault.check_deposit(LOCK_DURATION, 100 * ONE, 100 * ONE).is_ok());
    }

    #[test]
    fn withdraw_rejected_during_lock_window() {
        let vault = mock_vault(0);
        // Rejected vault-wide, with or without principal
        assert_eq!(
            vault.check_withdraw(LOCK_DURATION - 1, 100 * ONE, 50 * ONE),
            Err(VaultError::NotAvailable.into())
        );
        assert_eq!(
            vault.check_withdraw(0, 0, 50 * ONE),
            Err(VaultError::NotAvailable.into())
        );
    }

    #[test]
    fn withdraw_capped_at_principal() {
        let vault = mock_vault(0);
        let after = LOCK_DURATION;
        assert!(vault.check_withdraw(after, 100 * ONE, 50 * ONE).is_ok());
        assert!(vault.check_withdraw(after, 100 * ONE, 100 * ONE).is_ok());
        assert_eq!(
            vault.check_withdraw(after, 50 * ONE, 100 * ONE),
            Err(VaultError::NotAvailable.into())
        );
        // Zero principal always fails, mirroring an address that never deposited
        assert_eq!(
            vault.check_withdraw(after, 0, 50 * ONE),
            Err(VaultError::NotAvailable.into())
        );
    }

    #[test]
    fn accrual_full_year_at_full_rate() {
        let vault = mock_vault(0);
        // 100 tokens at 100% APY for a year accrues 100 tokens
        let accrued = vault.accrued_reward(100 * ONE, SECONDS_PER_YEAR).unwrap();
        assert_eq!(accrued, 100 * ONE);
    }

    #[test]
    fn accrual_is_linear_in_time_and_principal() {
        let vault = mock_vault(0);
        // 73 days is a fifth of the reference year, so results are exact
        let base = vault.accrued_reward(100 * ONE, 73 * DAY).unwrap();
        assert_eq!(base, 20 * ONE);
        assert_eq!(vault.accrued_reward(100 * ONE, 146 * DAY).unwrap(), 2 * base);
        assert_eq!(vault.accrued_reward(200 * ONE, 73 * DAY).unwrap(), 2 * base);
    }

    #[test]
    fn accrual_zero_for_zero_principal_or_elapsed() {
        let vault = mock_vault(0);
        assert_eq!(vault.accrued_reward(0, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(vault.accrued_reward(100 * ONE, 0).unwrap(), 0);
        assert_eq!(vault.accrued_reward(100 * ONE, -5).unwrap(), 0);
    }

    #[test]
    fn settle_advances_checkpoint_and_accrues() {
        let vault = mock_vault(0);
        let mut pos = mock_position(100 * ONE, 0);

        pos.settle(&vault, SECONDS_PER_YEAR).unwrap();
        assert_eq!(pos.claimable_reward, 100 * ONE);
        assert_eq!(pos.reward_checkpoint, SECONDS_PER_YEAR);

        // Idempotent at the same instant
        pos.settle(&vault, SECONDS_PER_YEAR).unwrap();
        assert_eq!(pos.claimable_reward, 100 * ONE);
    }

    #[test]
    fn settle_is_monotonic_for_fixed_principal() {
        let vault = mock_vault(0);
        let mut pos = mock_position(100 * ONE, 0);
        let mut last = 0u64;
        for day in 1..=10 {
            pos.settle(&vault, day * DAY).unwrap();
            assert!(pos.claimable_reward >= last);
            last = pos.claimable_reward;
        }
    }

    #[test]
    fn settle_before_principal_change_stops_accrual() {
        let vault = mock_vault(0);
        let mut pos = mock_position(100 * ONE, 0);

        // Withdraw everything after a year: settle first, then zero principal
        pos.settle(&vault, SECONDS_PER_YEAR).unwrap();
        pos.principal = 0;
        let frozen = pos.claimable_reward;

        // Another year passes with no principal; nothing more accrues
        pos.settle(&vault, 2 * SECONDS_PER_YEAR).unwrap();
        assert_eq!(pos.claimable_reward, frozen);
    }

    #[test]
    fn custody_take_accumulates_and_return_clamps() {
        let mut vault = mock_vault(0);

        vault.custody_take(100 * ONE).unwrap();
        vault.custody_take(50 * ONE).unwrap();
        assert_eq!(vault.custody_out, 150 * ONE);

        vault.custody_return(60 * ONE);
        assert_eq!(vault.custody_out, 90 * ONE);

        // Over-return clamps instead of underflowing
        vault.custody_return(200 * ONE);
        assert_eq!(vault.custody_out, 0);

        // Custody movement never touches the accounting ledger
        assert_eq!(vault.total_principal, 0);
    }

    #[test]
    fn accrual_handles_large_balances() {
        let vault = mock_vault(0);
        // 100k whole tokens for the full lock window must not overflow u128
        let accrued = vault.accrued_reward(100_000 * ONE, LOCK_DURATION).unwrap();
        assert!(accrued > 0);
        // 183/365 of a 100% APY year
        assert_eq!(accrued, ((100_000u128 * ONE as u128 * 183) / 365) as u64);
    }
}
