use crate::{PriceRange, VaultError};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Ordered, contiguous sequence of price ranges.
///
/// Coverage invariant: `ranges[i].upper == ranges[i + 1].lower` for every `i`.
/// Ranges are referenced by position; inserting at the low end moves every
/// existing range (and its balance) up by one index.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RangeLadder {
    pub ranges: Vec<PriceRange>,
    /// Growth bound; insertions beyond it fail instead of evicting a range
    pub max_len: u32,
}

impl RangeLadder {
    pub fn new(env: &Env, max_len: u32) -> Self {
        Self {
            ranges: Vec::new(env),
            max_len,
        }
    }

    pub fn len(&self) -> u32 {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: u32) -> Result<PriceRange, VaultError> {
        self.ranges.get(index).ok_or(VaultError::IndexOutOfBounds)
    }

    pub fn set(&mut self, index: u32, range: PriceRange) -> Result<(), VaultError> {
        if index >= self.len() {
            return Err(VaultError::IndexOutOfBounds);
        }
        self.ranges.set(index, range);
        Ok(())
    }

    fn contains_asset(&self, asset: &Address) -> bool {
        self.ranges.iter().any(|r| &r.asset == asset)
    }

    /// Index of the range containing `price`.
    ///
    /// Below the covered span this is 0; at or above it, the last index.
    pub fn active_index(&self, price: i128) -> Result<u32, VaultError> {
        let len = self.len();
        if len == 0 {
            return Err(VaultError::LadderNotInitialized);
        }
        if price < self.ranges.get_unchecked(0).lower {
            return Ok(0);
        }
        if price >= self.ranges.get_unchecked(len - 1).upper {
            return Ok(len - 1);
        }

        // Largest index whose lower bound is <= price
        let mut lo = 0u32;
        let mut hi = len - 1;
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if self.ranges.get_unchecked(mid).lower <= price {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        Ok(lo)
    }

    /// Add a range above the current top. The first range of an empty ladder
    /// is accepted without a contiguity check.
    pub fn append_high(&mut self, range: PriceRange) -> Result<(), VaultError> {
        if let Some(last) = self.ranges.last() {
            if range.lower != last.upper || self.contains_asset(&range.asset) {
                return Err(VaultError::RangeOverlap);
            }
        }
        if self.len() >= self.max_len {
            return Err(VaultError::LadderFull);
        }
        self.ranges.push_back(range);
        Ok(())
    }

    /// Add a range below the current bottom
    pub fn prepend_low(&mut self, range: PriceRange) -> Result<(), VaultError> {
        let first = self
            .ranges
            .first()
            .ok_or(VaultError::LadderNotInitialized)?;
        if range.upper != first.lower || self.contains_asset(&range.asset) {
            return Err(VaultError::RangeOverlap);
        }
        if self.len() >= self.max_len {
            return Err(VaultError::LadderFull);
        }
        self.ranges.push_front(range);
        Ok(())
    }

    /// The two adjacent indices a single-asset deposit is split across.
    ///
    /// token0 is held at and above the market price, so it goes to
    /// `(index, index + 1)`; token1 goes to `(index - 1, index)`. Both are
    /// clamped into the ladder. A one-range ladder yields `(0, 0)`.
    pub fn neighbors(&self, index: u32, increase_token0: bool) -> (u32, u32) {
        let len = self.len();
        if len < 2 {
            return (0, 0);
        }
        let index = index.min(len - 1);
        if increase_token0 {
            if index + 1 >= len {
                (len - 2, len - 1)
            } else {
                (index, index + 1)
            }
        } else if index == 0 {
            (0, 1)
        } else {
            (index - 1, index)
        }
    }

    /// Inclusive index bounds of every range a deposit may touch around `index`
    pub fn window(&self, index: u32) -> (u32, u32) {
        let (low1, high1) = self.neighbors(index, false);
        let (low0, high0) = self.neighbors(index, true);
        (low1.min(low0), high1.max(high0))
    }

    pub fn is_contiguous(&self) -> bool {
        let len = self.len();
        for i in 1..len {
            if self.ranges.get_unchecked(i - 1).upper != self.ranges.get_unchecked(i).lower {
                return false;
            }
        }
        true
    }
}
