// Constants for the Investing Vault program

/// Seed for vault state PDA
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for vault authority PDA
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

/// Seed for per-user position PDA
pub const USER_POSITION_SEED: &[u8] = b"user_position";

/// Length of the enrollment/lock window, measured from vault initialization.
/// Enrollment closes and withdrawals open at the same instant.
pub const LOCK_DURATION: i64 = 183 * 24 * 60 * 60;

/// Fixed-point scale for `reward_rate`: 1_000_000_000 == 100% per annum
pub const RATE_SCALE: u64 = 1_000_000_000;

/// Reference period for reward accrual (365-day year, in seconds)
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Space for VaultState account (8 discriminator + 32 authority + 32 asset_mint +
/// 8 min_deposit + 8 reward_rate + 8 deployment_timestamp + 8 total_principal +
/// 8 custody_out + 1 bump + 1 authority_bump + 128 padding)
pub const VAULT_STATE_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 1 + 1 + 128;

/// Space for UserPosition account (8 discriminator + 32 vault + 32 user +
/// 8 principal + 8 reward_checkpoint + 8 claimable_reward + 1 bump + 32 padding)
pub const USER_POSITION_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1 + 32;
