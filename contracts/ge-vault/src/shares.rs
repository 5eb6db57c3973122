use crate::events;
use crate::storage::{
    get_balance, get_total_supply, set_allowance, set_balance, set_total_supply, spend_allowance,
};
use soroban_sdk::{Address, Env};
use vault_types::VaultError;

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), VaultError> {
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(VaultError::InvalidAmount)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(VaultError::InvalidAmount)?;
    set_balance(env, to, balance);
    set_total_supply(env, supply);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    let balance = get_balance(env, from);
    if amount > balance {
        return Err(VaultError::InsufficientShares);
    }
    set_balance(env, from, balance - amount);
    set_total_supply(env, get_total_supply(env) - amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::InvalidAmount);
    }
    let from_balance = get_balance(env, from);
    if amount > from_balance {
        return Err(VaultError::InsufficientShares);
    }
    if from != to {
        set_balance(env, from, from_balance - amount);
        set_balance(env, to, get_balance(env, to) + amount);
    }
    events::transfer(env, from, to, amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), VaultError> {
    set_allowance(env, from, spender, amount, expiration_ledger)?;
    events::approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Transfer on behalf of `from`, spending the allowance granted to `spender`
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::InvalidAmount);
    }
    spend_allowance(env, from, spender, amount)?;
    transfer(env, from, to, amount)
}

/// Destroy shares without redeeming them; their value stays with the other holders
pub fn burn_shares(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::InvalidAmount);
    }
    burn(env, from, amount)?;
    events::burn(env, from, amount);
    Ok(())
}

pub fn burn_from(env: &Env, spender: &Address, from: &Address, amount: i128) -> Result<(), VaultError> {
    if amount <= 0 {
        return Err(VaultError::InvalidAmount);
    }
    spend_allowance(env, from, spender, amount)?;
    burn_shares(env, from, amount)
}
