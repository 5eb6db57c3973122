// ============================================================================
// LADDER SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Appending or prepending a range keeps the ladder contiguous
// 2. The active index is always a valid position
// 3. Deposit neighbors are two distinct valid positions
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use vault_types::{PriceRange, RangeLadder};

/// Two-range ladder [lower, mid) [mid, upper)
#[cfg(feature = "certora")]
fn two_ranges(env: &Env, a: Address, b: Address, lower: i128, mid: i128, upper: i128) -> RangeLadder {
    let mut ladder = RangeLadder::new(env, 4);
    if let Ok(first) = PriceRange::new(a, lower, mid) {
        let _ = ladder.append_high(first);
    }
    if let Ok(second) = PriceRange::new(b, mid, upper) {
        let _ = ladder.append_high(second);
    }
    ladder
}

/// RULE: Successful insertions preserve contiguity
#[cfg(feature = "certora")]
#[rule]
pub fn insertions_keep_contiguity(
    env: Env,
    a: Address,
    b: Address,
    c: Address,
    lower: i128,
    mid: i128,
    upper: i128,
    new_lower: i128,
) {
    cvlr_assume!(a != b && b != c && a != c);
    cvlr_assume!(0 < new_lower && new_lower < lower && lower < mid && mid < upper);

    let mut ladder = two_ranges(&env, a, b, lower, mid, upper);
    cvlr_assert!(crate::invariants::ladder_contiguous(&ladder));

    if let Ok(range) = PriceRange::new(c, new_lower, lower) {
        if ladder.prepend_low(range).is_ok() {
            cvlr_assert!(crate::invariants::ladder_contiguous(&ladder));
            cvlr_assert!(crate::invariants::ladder_bounded(&ladder));
        }
    }
}

/// RULE: Active index and neighbors stay inside the ladder
#[cfg(feature = "certora")]
#[rule]
pub fn indices_in_bounds(
    env: Env,
    a: Address,
    b: Address,
    lower: i128,
    mid: i128,
    upper: i128,
    price: i128,
    increase_token0: bool,
) {
    cvlr_assume!(a != b);
    cvlr_assume!(0 < lower && lower < mid && mid < upper);

    let ladder = two_ranges(&env, a, b, lower, mid, upper);
    cvlr_assume!(ladder.len() == 2);

    if let Ok(index) = ladder.active_index(price) {
        cvlr_assert!(index < ladder.len());
        let (low, high) = ladder.neighbors(index, increase_token0);
        cvlr_assert!(low < high);
        cvlr_assert!(high < ladder.len());
    }
}
