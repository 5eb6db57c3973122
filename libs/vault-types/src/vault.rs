use crate::{VaultError, BPS_SCALE, MAX_BASE_FEE_X4};
use soroban_sdk::{contracttype, Address, String};

/// Contracts the vault is wired to - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultAssets {
    /// Priced asset (held by ranges at and above the market price)
    pub token0: Address,
    /// Quote asset (held by ranges at and below the market price)
    pub token1: Address,
    /// AMM pool trading token0/token1, source of the spot price
    pub pool: Address,
    /// USD price oracle
    pub oracle: Address,
    /// Lending pool reporting how much of each range asset is not borrowed out
    pub lending_pool: Address,
    /// Swap router used to pay withdrawals out in a single token
    pub router: Address,
}

/// Admin-mutable vault configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub admin: Address,
    /// Allowed to call rebalance
    pub operator: Address,
    /// Receives deposit fee shares and withdrawal fees
    pub treasury: Address,
    pub enabled: bool,
    /// Maximum TVL in USD (X8)
    pub tvl_cap: i128,
    /// Base fee in 1/10000
    pub base_fee_x4: u32,
    /// Maximum spot/oracle deviation in bps
    pub oracle_tolerance_bps: u32,
}

impl VaultConfig {
    pub fn validate(&self) -> Result<(), VaultError> {
        if self.base_fee_x4 > MAX_BASE_FEE_X4 {
            return Err(VaultError::InvalidFee);
        }
        if self.oracle_tolerance_bps == 0 || self.oracle_tolerance_bps > BPS_SCALE {
            return Err(VaultError::InvalidFee);
        }
        if self.tvl_cap < 0 {
            return Err(VaultError::InvalidAmount);
        }
        Ok(())
    }
}

/// Token metadata of the vault share
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// How much of a rebalance could be carried out
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RebalanceOutcome {
    /// Active range did not change; nothing moved
    Unchanged,
    /// Every range outside the new window was emptied
    FullyMoved,
    /// USD value (X8) left behind because it is lent out
    PartiallyMoved(i128),
}
