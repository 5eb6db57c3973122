use crate::{VaultError, SHARE_SCALE};
use soroban_sdk::{contracttype, Address};

/// One tick of the vault: an immutable price interval backed by a range asset,
/// together with the range shares the vault holds in it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceRange {
    /// Range-backing asset contract
    pub asset: Address,
    /// Lower price bound (X8, inclusive)
    pub lower: i128,
    /// Upper price bound (X8, exclusive)
    pub upper: i128,
    /// Range shares held by the vault
    pub balance: i128,
}

impl PriceRange {
    pub fn new(asset: Address, lower: i128, upper: i128) -> Result<Self, VaultError> {
        if lower <= 0 || lower >= upper {
            return Err(VaultError::InvalidRange);
        }
        Ok(Self {
            asset,
            lower,
            upper,
            balance: 0,
        })
    }

    /// True if `lower <= price < upper`
    pub fn contains(&self, price: i128) -> bool {
        self.lower <= price && price < self.upper
    }

    pub fn credit(&mut self, amount: i128) -> Result<(), VaultError> {
        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::InvalidAmount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: i128) -> Result<(), VaultError> {
        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(VaultError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }

    /// USD value (X8) of the vault's balance at the given value per whole share
    pub fn value(&self, value_per_share: i128) -> i128 {
        self.balance * value_per_share / SHARE_SCALE
    }
}
