// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Properties of the vault expressed as pure predicates. They are checked by
// the contract tests and by the Certora rules in certora_specs/.
//
// INVARIANT CATEGORIES:
//
// 1. LADDER INVARIANTS
//    - Ranges are contiguous
//    - Range balances never go negative
//    - The ladder never exceeds its growth bound
//
// 2. FEE INVARIANTS
//    - Adjusted fee stays within [base / 2, base * 3 / 2]
//    - Fee shares never exceed the gross shares of a deposit
//
// 3. SHARE INVARIANTS
//    - Supply changes only by minted and burned amounts
//    - Withdrawals remove at most the pro-rata part of each range
//
// ============================================================================

use vault_math::{fee_ceiling, fee_floor};
use vault_types::{PriceRange, RangeLadder};

// ============================================================================
// LADDER INVARIANTS
// ============================================================================

/// Invariant: the ladder covers one contiguous price span
///
/// Property:
///   for all i: ranges[i].upper == ranges[i + 1].lower
pub fn ladder_contiguous(ladder: &RangeLadder) -> bool {
    ladder.is_contiguous()
}

/// Invariant: every range is well formed and holds a non-negative balance
///
/// Property:
///   0 < lower < upper && balance >= 0
pub fn range_well_formed(range: &PriceRange) -> bool {
    range.lower > 0 && range.lower < range.upper && range.balance >= 0
}

/// Invariant: the ladder respects its growth bound
pub fn ladder_bounded(ladder: &RangeLadder) -> bool {
    ladder.len() <= ladder.max_len
}

// ============================================================================
// FEE INVARIANTS
// ============================================================================

/// Invariant: adjusted fee within the clamp band
///
/// Property:
///   base / 2 <= fee <= base * 3 / 2
pub fn fee_within_band(base_fee_x4: u32, fee_x4: u32) -> bool {
    fee_x4 >= fee_floor(base_fee_x4) && fee_x4 <= fee_ceiling(base_fee_x4)
}

/// Invariant: fee shares are a part of the gross shares
pub fn fee_shares_bounded(fee_shares: i128, gross_shares: i128) -> bool {
    fee_shares >= 0 && fee_shares <= gross_shares
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: supply accounting
///
/// Property:
///   supply_after == supply_before + minted - burned
pub fn supply_conserved(supply_before: i128, minted: i128, burned: i128, supply_after: i128) -> bool {
    supply_before + minted - burned == supply_after
}

/// Invariant: a withdrawal takes at most its pro-rata part of a range
///
/// Property:
///   removed * supply <= balance * share_amount
pub fn withdrawal_pro_rata(balance: i128, removed: i128, share_amount: i128, supply: i128) -> bool {
    match (removed.checked_mul(supply), balance.checked_mul(share_amount)) {
        (Some(lhs), Some(rhs)) => removed >= 0 && lhs <= rhs,
        _ => false,
    }
}
