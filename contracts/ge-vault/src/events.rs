use soroban_sdk::{Address, Env, Symbol};
use vault_types::RebalanceOutcome;

pub fn initialized(env: &Env, token0: &Address, token1: &Address, pool: &Address) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (token0.clone(), token1.clone(), pool.clone()),
    );
}

pub fn deposit(env: &Env, from: &Address, token: &Address, amount: i128, shares: i128, fee_x4: u32) {
    env.events().publish(
        (Symbol::new(env, "deposit"), from.clone()),
        (token.clone(), amount, shares, fee_x4),
    );
}

pub fn withdraw(env: &Env, from: &Address, token: &Address, shares: i128, amount: i128, fee: i128) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), from.clone()),
        (token.clone(), shares, amount, fee),
    );
}

pub fn rebalance(env: &Env, previous: Option<u32>, current: u32, outcome: &RebalanceOutcome) {
    env.events().publish(
        (Symbol::new(env, "rebalance"),),
        (previous, current, outcome.clone()),
    );
}

pub fn tick_pushed(env: &Env, range: &Address, lower: i128, upper: i128) {
    env.events().publish(
        (Symbol::new(env, "tick_pushed"), range.clone()),
        (lower, upper),
    );
}

pub fn tick_shifted(env: &Env, range: &Address, lower: i128, upper: i128) {
    env.events().publish(
        (Symbol::new(env, "tick_shifted"), range.clone()),
        (lower, upper),
    );
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((Symbol::new(env, "burn"), from.clone()), amount);
}

pub fn enabled(env: &Env, enabled: bool) {
    env.events().publish((Symbol::new(env, "enabled"),), enabled);
}

pub fn tvl_cap(env: &Env, cap: i128) {
    env.events().publish((Symbol::new(env, "tvl_cap"),), cap);
}

pub fn base_fee(env: &Env, fee_x4: u32) {
    env.events().publish((Symbol::new(env, "base_fee"),), fee_x4);
}

pub fn treasury(env: &Env, treasury: &Address) {
    env.events()
        .publish((Symbol::new(env, "treasury"),), treasury.clone());
}

pub fn operator(env: &Env, operator: &Address) {
    env.events()
        .publish((Symbol::new(env, "operator"),), operator.clone());
}

pub fn max_ticks(env: &Env, max_len: u32) {
    env.events().publish((Symbol::new(env, "max_ticks"),), max_len);
}
