// ============================================================================
// ORACLE GUARD SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A spot price equal to a live oracle always matches
// 2. A dead oracle (non-positive price) never matches
// 3. Widening the tolerance never turns a match into a mismatch
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use vault_math::pool_matches_oracle;

#[cfg(feature = "certora")]
const MAX_PRICE: i128 = 1_000_000_000_000_000_000;

/// RULE: Identical prices match at any valid tolerance
#[cfg(feature = "certora")]
#[rule]
pub fn identical_prices_match(price: i128, tolerance_bps: u32) {
    cvlr_assume!(price > 0 && price <= MAX_PRICE);
    cvlr_assume!(tolerance_bps > 0 && tolerance_bps <= 10_000);
    cvlr_assert!(pool_matches_oracle(price, price, tolerance_bps));
}

/// RULE: Dead oracle never matches
#[cfg(feature = "certora")]
#[rule]
pub fn dead_oracle_never_matches(spot: i128, oracle: i128, tolerance_bps: u32) {
    cvlr_assume!(oracle <= 0);
    cvlr_assert!(!pool_matches_oracle(spot, oracle, tolerance_bps));
}

/// RULE: Tolerance is monotonic
#[cfg(feature = "certora")]
#[rule]
pub fn tolerance_monotonic(spot: i128, oracle: i128, narrow: u32, wide: u32) {
    cvlr_assume!(spot > 0 && spot <= MAX_PRICE);
    cvlr_assume!(oracle > 0 && oracle <= MAX_PRICE);
    cvlr_assume!(narrow <= wide && wide <= 10_000);

    if pool_matches_oracle(spot, oracle, narrow) {
        cvlr_assert!(pool_matches_oracle(spot, oracle, wide));
    }
}
