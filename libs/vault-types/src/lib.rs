#![no_std]

mod error;
mod ladder;
mod range;
mod swap;
mod vault;

pub use error::*;
pub use ladder::*;
pub use range::*;
pub use swap::*;
pub use vault::*;

/// Q96 constant (2^96) for fixed-point sqrt prices
pub const Q96: u128 = 1 << 96;

/// Prices and USD values carry 8 decimals (X8), as reported by the price oracle
pub const PRICE_SCALE: i128 = 100_000_000;

/// Range-share units per whole share; `value_per_share` is quoted per whole share
pub const SHARE_SCALE: i128 = 10_000_000;

/// Vault shares carry the same 8 decimals as the USD values they are minted against
pub const SHARE_DECIMALS: u32 = 8;

/// Smallest first deposit, in shares ($1). Keeps one share from being worth
/// enough that later deposits round down to nothing.
pub const MIN_INITIAL_SHARES: i128 = PRICE_SCALE;

/// Fees are expressed in 1/10000 (X4)
pub const FEE_SCALE_X4: u32 = 10_000;

/// Basis point denominator for tolerances
pub const BPS_SCALE: u32 = 10_000;

/// Highest accepted base fee. The adjusted fee may reach 1.5x the base,
/// which must stay below 100%.
pub const MAX_BASE_FEE_X4: u32 = 6_666;

/// Spot price may deviate from the oracle price by 1% before operations are refused
pub const DEFAULT_ORACLE_TOLERANCE_BPS: u32 = 100;

/// Default ladder length bound
pub const DEFAULT_MAX_TICKS: u32 = 16;

/// Hard ladder length bound. Rebalance visits every range, and each visit costs
/// cross-contract reads and token transfers, so the ladder cannot grow unbounded.
pub const MAX_TICKS_LIMIT: u32 = 32;
