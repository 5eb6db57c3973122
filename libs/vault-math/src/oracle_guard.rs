use crate::full_math::mul_div_floor;
use vault_types::{BPS_SCALE, PRICE_SCALE};

/// Ratio of two oracle USD prices as the X8 price of asset0 in asset1.
/// Returns 0 when either feed is not positive.
pub fn oracle_price_x8(price0: i128, price1: i128) -> i128 {
    if price0 <= 0 || price1 <= 0 {
        return 0;
    }
    mul_div_floor(price0, PRICE_SCALE, price1)
}

/// Absolute deviation of `spot` from `oracle` in basis points (rounded down)
pub fn deviation_bps(spot: i128, oracle: i128) -> i128 {
    if oracle <= 0 {
        return i128::MAX;
    }
    mul_div_floor((spot - oracle).abs(), BPS_SCALE as i128, oracle)
}

/// True when the pool spot price sits within `tolerance_bps` of the oracle.
///
/// A non-positive price on either side never matches, so a dead feed blocks
/// every operation gated on this check.
pub fn pool_matches_oracle(spot: i128, oracle: i128, tolerance_bps: u32) -> bool {
    if spot <= 0 || oracle <= 0 {
        return false;
    }
    let diff = (spot - oracle).abs();
    match (
        diff.checked_mul(BPS_SCALE as i128),
        oracle.checked_mul(tolerance_bps as i128),
    ) {
        (Some(lhs), Some(rhs)) => lhs <= rhs,
        _ => false,
    }
}
