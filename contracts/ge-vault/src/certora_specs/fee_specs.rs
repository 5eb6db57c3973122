// ============================================================================
// FEE CURVE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Adjusted fee never leaves [base / 2, base * 3 / 2]
// 2. Deepening an imbalance never lowers the fee
// 3. A perfectly balanced vault charges exactly the base fee
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use vault_math::adjusted_fee;

#[cfg(feature = "certora")]
use vault_types::MAX_BASE_FEE_X4;

/// Keeps value products far from i128 overflow
#[cfg(feature = "certora")]
const MAX_VALUE: i128 = 1_000_000_000_000_000_000_000_000;

/// RULE: Sanity - a fee above the base is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_fee_above_base(base: u32, value0: i128, value1: i128) {
    cvlr_assume!(base > 0 && base <= MAX_BASE_FEE_X4);
    cvlr_assume!(value0 > 0 && value0 <= MAX_VALUE);
    cvlr_assume!(value1 > 0 && value1 <= MAX_VALUE);
    let fee = adjusted_fee(base, true, value0, value1);
    cvlr_satisfy!(fee > base);
}

/// RULE: Fee stays within the clamp band
#[cfg(feature = "certora")]
#[rule]
pub fn fee_within_band(base: u32, increase_token0: bool, value0: i128, value1: i128) {
    cvlr_assume!(base <= MAX_BASE_FEE_X4);
    cvlr_assume!(value0 >= 0 && value0 <= MAX_VALUE);
    cvlr_assume!(value1 >= 0 && value1 <= MAX_VALUE);

    let fee = adjusted_fee(base, increase_token0, value0, value1);
    cvlr_assert!(crate::invariants::fee_within_band(base, fee));
}

/// RULE: Adding value to the increasing side never lowers the fee
#[cfg(feature = "certora")]
#[rule]
pub fn fee_monotonic_in_imbalance(base: u32, value0: i128, extra: i128, value1: i128) {
    cvlr_assume!(base <= MAX_BASE_FEE_X4);
    cvlr_assume!(value0 >= 0 && value0 <= MAX_VALUE);
    cvlr_assume!(extra >= 0 && extra <= MAX_VALUE);
    cvlr_assume!(value1 >= 0 && value1 <= MAX_VALUE);

    let before = adjusted_fee(base, true, value0, value1);
    let after = adjusted_fee(base, true, value0 + extra, value1);
    cvlr_assert!(after >= before);
}

/// RULE: Balanced vault pays the base fee on both sides
#[cfg(feature = "certora")]
#[rule]
pub fn balanced_vault_pays_base(base: u32, value: i128) {
    cvlr_assume!(base <= MAX_BASE_FEE_X4);
    cvlr_assume!(value > 0 && value <= MAX_VALUE);

    cvlr_assert!(adjusted_fee(base, true, value, value) == base);
    cvlr_assert!(adjusted_fee(base, false, value, value) == base);
}
