//! Imbalance-sensitive deposit/withdraw fee.
//!
//! The base fee is scaled by how lopsided the vault would become on the side
//! an operation adds to, then clamped into `[base / 2, base * 3 / 2]`.
//! Operations that restore balance pay less; operations that deepen an
//! imbalance pay more.

use crate::full_math::mul_div_floor;

/// Lowest fee the curve can produce
pub fn fee_floor(base_fee_x4: u32) -> u32 {
    base_fee_x4 / 2
}

/// Highest fee the curve can produce
pub fn fee_ceiling(base_fee_x4: u32) -> u32 {
    base_fee_x4 * 3 / 2
}

/// Fee (X4) for an operation that increases token0 exposure when
/// `increase_token0`, token1 otherwise, given the current USD value held in
/// each token.
///
/// - Nothing held on the increasing side (including an empty vault): floor
/// - Nothing held on the other side: ceiling
/// - Otherwise `base * increasing / other`, clamped
pub fn adjusted_fee(base_fee_x4: u32, increase_token0: bool, value0: i128, value1: i128) -> u32 {
    let (increasing, other) = if increase_token0 {
        (value0, value1)
    } else {
        (value1, value0)
    };
    let floor = fee_floor(base_fee_x4);
    let ceiling = fee_ceiling(base_fee_x4);

    if increasing <= 0 {
        return floor;
    }
    if other <= 0 {
        return ceiling;
    }

    let scaled = mul_div_floor(base_fee_x4 as i128, increasing, other);
    scaled.clamp(floor as i128, ceiling as i128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u32 = 30;

    #[test]
    fn test_empty_vault_is_floor() {
        assert_eq!(adjusted_fee(BASE, true, 0, 0), BASE / 2);
        assert_eq!(adjusted_fee(BASE, false, 0, 0), BASE / 2);
    }

    #[test]
    fn test_one_sided_vault() {
        // Only token1 held: adding more token1 is penalized, adding token0 is cheap
        assert_eq!(adjusted_fee(BASE, false, 0, 1_000_00000000), BASE * 3 / 2);
        assert_eq!(adjusted_fee(BASE, true, 0, 1_000_00000000), BASE / 2);
    }

    #[test]
    fn test_balanced_vault_pays_base() {
        let v = 5_000_00000000;
        assert_eq!(adjusted_fee(BASE, true, v, v), BASE);
        assert_eq!(adjusted_fee(BASE, false, v, v), BASE);
    }

    #[test]
    fn test_proportional_inside_band() {
        // token0 holds 1.2x the value of token1
        let value1 = 1_000_00000000;
        let value0 = 1_200_00000000;
        assert_eq!(adjusted_fee(BASE, true, value0, value1), BASE * 12 / 10);
        assert_eq!(adjusted_fee(BASE, false, value0, value1), BASE * 10 / 12);
    }

    #[test]
    fn test_clamped_to_band() {
        assert_eq!(adjusted_fee(BASE, true, 100, 1), fee_ceiling(BASE));
        assert_eq!(adjusted_fee(BASE, true, 1, 100), fee_floor(BASE));
    }

    #[test]
    fn test_monotonic_in_imbalance() {
        let value1 = 1_000_00000000;
        let mut previous = 0;
        let mut value0 = 100_00000000;
        while value0 <= 3_000_00000000 {
            let fee = adjusted_fee(BASE, true, value0, value1);
            assert!(fee >= previous);
            assert!(fee >= fee_floor(BASE) && fee <= fee_ceiling(BASE));
            previous = fee;
            value0 += 100_00000000;
        }
    }

    #[test]
    fn test_zero_base_fee() {
        assert_eq!(adjusted_fee(0, true, 7, 3), 0);
        assert_eq!(adjusted_fee(0, false, 0, 3), 0);
    }
}
