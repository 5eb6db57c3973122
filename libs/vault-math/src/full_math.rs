use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let result = a_256.mul(&b_256).div(&denom_256);
    u128_from_u256(env, &result)
}

/// Convert U256 to u128, panics if overflow
fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        panic!("U256 overflow when converting to u128");
    }
    value.to_u128().unwrap()
}

/// Signed (a * b) / denominator, rounding down. Used for USD values and
/// share amounts, which are non-negative i128.
pub fn mul_div_floor(a: i128, b: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        panic!("Division by zero");
    }
    a.fixed_mul_floor(b, denominator)
        .unwrap_or_else(|| panic!("Overflow in mul_div_floor"))
}

/// Convert u128 to i128, panics if it does not fit
pub fn to_i128(value: u128) -> i128 {
    if value > i128::MAX as u128 {
        panic!("u128 overflow when converting to i128");
    }
    value as i128
}
