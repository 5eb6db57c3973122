use crate::full_math::{mul_div, to_i128};
use soroban_sdk::{Env, U256};
use vault_types::{PRICE_SCALE, Q96};

/// Price of token0 denominated in token1 (X8, whole-unit terms) from the
/// pool's Q64.96 sqrt price.
///
/// The raw sqrt price relates smallest units: `(sqrt / 2^96)^2` is how many
/// units of token1 one unit of token0 buys. Decimals are folded back in so
/// that the result is directly comparable with an oracle ratio.
///
/// Computed as `sqrt^2 * 10^dec0 * 1e8 / (2^192 * 10^dec1)` in 256 bits, so
/// raw prices far from 1 (tokens with very different decimals) are fine.
pub fn spot_price_x8(env: &Env, sqrt_price_x96: u128, decimals0: u32, decimals1: u32) -> i128 {
    let sqrt = U256::from_u128(env, sqrt_price_x96);
    let q96 = U256::from_u128(env, Q96);
    let scale0 = U256::from_u128(env, 10u128.pow(decimals0) * PRICE_SCALE as u128);
    let scale1 = U256::from_u128(env, 10u128.pow(decimals1));

    // sqrt^2 / 2^96 < 2^160, leaving room for the decimal scale
    let price_x96 = sqrt.mul(&sqrt).div(&q96);
    let scaled = price_x96.mul(&scale0).div(&q96).div(&scale1);
    match scaled.to_u128() {
        Some(value) => to_i128(value),
        None => panic!("Spot price overflow"),
    }
}

/// Inverse of [`spot_price_x8`]: the Q64.96 sqrt price at which the pool
/// quotes `price_x8`.
pub fn sqrt_price_x96_from_price_x8(
    env: &Env,
    price_x8: i128,
    decimals0: u32,
    decimals1: u32,
) -> u128 {
    if price_x8 <= 0 {
        panic!("Price must be positive");
    }
    // Raw price as Q64.64, then sqrt gives Q32 and a final shift lifts it to Q96
    let raw_q64 = mul_div(
        env,
        price_x8 as u128,
        (1u128 << 64) * 10u128.pow(decimals1),
        PRICE_SCALE as u128 * 10u128.pow(decimals0),
    );
    isqrt(raw_q64) << 64
}

/// Integer square root (floor)
pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut x = value;
    let mut y = value / 2 + 1;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_spot_price_at_one() {
        let env = Env::default();
        assert_eq!(spot_price_x8(&env, Q96, 7, 7), PRICE_SCALE);
    }

    #[test]
    fn test_spot_price_at_four() {
        let env = Env::default();
        // sqrt price 2.0
        assert_eq!(spot_price_x8(&env, Q96 * 2, 7, 7), 4 * PRICE_SCALE);
    }

    #[test]
    fn test_spot_price_folds_decimals() {
        let env = Env::default();
        // Raw price 1e6: one smallest unit of a 6-decimal token0 buys 1e6
        // smallest units of a 12-decimal token1, so whole units trade 1:1
        assert_eq!(spot_price_x8(&env, Q96 * 1_000, 6, 12), PRICE_SCALE);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let env = Env::default();
        for price in [1_160_00000000i128, 1_620_00000000, 1_999_00000000] {
            let sqrt = sqrt_price_x96_from_price_x8(&env, price, 7, 7);
            let back = spot_price_x8(&env, sqrt, 7, 7);
            // Q32 sqrt precision is well inside one basis point
            assert!((back - price).abs() * 10_000 <= price);
        }
    }

    #[test]
    fn test_spot_price_mixed_decimals() {
        let env = Env::default();
        // 7-decimal token0 against an 18-decimal token1: raw price ~1.6e14
        let sqrt = sqrt_price_x96_from_price_x8(&env, 1_620_00000000, 7, 18);
        let back = spot_price_x8(&env, sqrt, 7, 18);
        assert!((back - 1_620_00000000).abs() * 10_000 <= 1_620_00000000);

        // And the other way round: raw price ~1.6e-8
        let sqrt = sqrt_price_x96_from_price_x8(&env, 1_620_00000000, 18, 7);
        let back = spot_price_x8(&env, sqrt, 18, 7);
        assert!((back - 1_620_00000000).abs() * 10_000 <= 1_620_00000000);
    }

    #[test]
    fn test_spot_price_at_max_sqrt() {
        let env = Env::default();
        // (2^128)^2 / 2^192 = 2^64 raw, times 1e8 still fits i128
        let price = spot_price_x8(&env, u128::MAX, 7, 7);
        assert!(price > (1i128 << 64) * (PRICE_SCALE - 1));
    }

    #[test]
    #[should_panic(expected = "Price must be positive")]
    fn test_sqrt_price_rejects_zero() {
        let env = Env::default();
        sqrt_price_x96_from_price_x8(&env, 0, 7, 7);
    }
}
