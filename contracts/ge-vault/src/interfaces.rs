//! Calls into the vault's collaborators: price oracle, AMM pool, range-backing
//! assets, lending pool and swap router.

use soroban_sdk::{Address, Env, IntoVal, Symbol};
use vault_types::ExactInputSingleParams;

// === Oracle ===

/// USD price of `asset`, 8 decimals
pub fn oracle_price(env: &Env, oracle: &Address, asset: &Address) -> i128 {
    env.invoke_contract(
        oracle,
        &Symbol::new(env, "get_asset_price"),
        (asset.clone(),).into_val(env),
    )
}

// === AMM pool ===

pub fn pool_sqrt_price_x96(env: &Env, pool: &Address) -> u128 {
    env.invoke_contract(pool, &Symbol::new(env, "sqrt_price_x96"), ().into_val(env))
}

pub fn pool_tokens(env: &Env, pool: &Address) -> (Address, Address) {
    let token0 = env.invoke_contract(pool, &Symbol::new(env, "token0"), ().into_val(env));
    let token1 = env.invoke_contract(pool, &Symbol::new(env, "token1"), ().into_val(env));
    (token0, token1)
}

pub fn pool_fee(env: &Env, pool: &Address) -> u32 {
    env.invoke_contract(pool, &Symbol::new(env, "fee"), ().into_val(env))
}

// === Range asset ===

/// (lower, upper) price bounds of the range, X8 price of token0 in token1
pub fn range_bounds(env: &Env, range: &Address) -> (i128, i128) {
    let lower = env.invoke_contract(range, &Symbol::new(env, "lower_price"), ().into_val(env));
    let upper = env.invoke_contract(range, &Symbol::new(env, "upper_price"), ().into_val(env));
    (lower, upper)
}

pub fn range_tokens(env: &Env, range: &Address) -> (Address, Address) {
    let token0 = env.invoke_contract(range, &Symbol::new(env, "token0"), ().into_val(env));
    let token1 = env.invoke_contract(range, &Symbol::new(env, "token1"), ().into_val(env));
    (token0, token1)
}

/// USD value (X8) of one whole range share
pub fn range_value_per_share(env: &Env, range: &Address) -> i128 {
    env.invoke_contract(
        range,
        &Symbol::new(env, "value_per_share"),
        ().into_val(env),
    )
}

/// Underlying (amount0, amount1) redeemable for `shares`
pub fn range_token_amounts(env: &Env, range: &Address, shares: i128) -> (i128, i128) {
    env.invoke_contract(
        range,
        &Symbol::new(env, "token_amounts"),
        (shares,).into_val(env),
    )
}

/// Mint range shares against tokens already transferred to the range asset
pub fn range_mint(env: &Env, range: &Address, to: &Address, amount0: i128, amount1: i128) -> i128 {
    env.invoke_contract(
        range,
        &Symbol::new(env, "mint"),
        (to.clone(), amount0, amount1).into_val(env),
    )
}

/// Burn range shares, paying the underlying tokens to `to`
pub fn range_burn(
    env: &Env,
    range: &Address,
    from: &Address,
    shares: i128,
    to: &Address,
) -> (i128, i128) {
    env.invoke_contract(
        range,
        &Symbol::new(env, "burn"),
        (from.clone(), shares, to.clone()).into_val(env),
    )
}

// === Lending pool ===

/// Range shares of `asset` not lent out, i.e. withdrawable right now
pub fn lending_available(env: &Env, lending_pool: &Address, asset: &Address) -> i128 {
    env.invoke_contract(
        lending_pool,
        &Symbol::new(env, "available_liquidity"),
        (asset.clone(),).into_val(env),
    )
}

// === Router ===

pub fn router_exact_input_single(
    env: &Env,
    router: &Address,
    params: &ExactInputSingleParams,
) -> i128 {
    env.invoke_contract(
        router,
        &Symbol::new(env, "exact_input_single"),
        (params.clone(),).into_val(env),
    )
}
