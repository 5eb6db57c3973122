// ============================================================================
// SHARE ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A deposit split never hands out more than the deposited amount
// 2. Withdrawals take at most the pro-rata part of each range
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use vault_math::mul_div_floor;

#[cfg(feature = "certora")]
const MAX_AMOUNT: i128 = 1_000_000_000_000_000_000;

/// RULE: Deposit split stays within the deposited amount
#[cfg(feature = "certora")]
#[rule]
pub fn split_bounded(amount: i128, low_value: i128, high_value: i128) {
    cvlr_assume!(amount >= 0 && amount <= MAX_AMOUNT);
    cvlr_assume!(low_value >= 0 && low_value <= MAX_AMOUNT);
    cvlr_assume!(high_value >= 0 && high_value <= MAX_AMOUNT);

    let low = crate::liquidity::split_amount(amount, low_value, high_value);
    cvlr_assert!(low >= 0);
    cvlr_assert!(low <= amount);
}

/// RULE: Range removal is pro rata and rounds toward the vault
#[cfg(feature = "certora")]
#[rule]
pub fn removal_pro_rata(balance: i128, share_amount: i128, supply: i128) {
    cvlr_assume!(balance >= 0 && balance <= MAX_AMOUNT);
    cvlr_assume!(supply > 0 && supply <= MAX_AMOUNT);
    cvlr_assume!(share_amount > 0 && share_amount <= supply);

    let removed = mul_div_floor(balance, share_amount, supply);
    cvlr_assert!(crate::invariants::withdrawal_pro_rata(
        balance,
        removed,
        share_amount,
        supply
    ));
    cvlr_assert!(removed <= balance);
}
