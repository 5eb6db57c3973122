use crate::events;
use crate::guard::ReentrancyGuard;
use crate::interfaces::{
    lending_available, pool_fee, range_burn, range_mint, range_value_per_share,
    router_exact_input_single,
};
use crate::shares;
use crate::storage::{
    get_assets, get_balance, get_config, get_ladder, get_last_active_index, get_total_supply,
    set_ladder, set_last_active_index,
};
use crate::valuation::{checked_spot_price, idle_balances, is_token0, side_values, tvl, Prices};
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol};
use vault_math::{adjusted_fee, mul_div_floor};
use vault_types::{
    ExactInputSingleParams, PriceRange, RangeLadder, VaultAssets, VaultConfig, VaultError,
    BPS_SCALE, FEE_SCALE_X4, MIN_INITIAL_SHARES,
};

/// Deposit a single token and receive vault shares
///
/// # Returns
/// Shares minted to `from` (after the fee shares minted to the treasury)
pub fn deposit(env: &Env, from: Address, token: Address, amount: i128) -> Result<i128, VaultError> {
    from.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let assets = get_assets(env)?;
    let config = get_config(env)?;
    if !config.enabled {
        return Err(VaultError::PoolDisabled);
    }
    if amount <= 0 {
        return Err(VaultError::DepositZero);
    }
    let deposit_token0 = is_token0(&assets, &token)?;
    let mut ladder = get_ladder(env)?;
    if ladder.is_empty() {
        return Err(VaultError::LadderNotInitialized);
    }
    let prices = Prices::load(env, &assets)?;
    let spot = checked_spot_price(env, &assets, &config, &prices)?;
    let index = ladder.active_index(spot)?;

    let deposit_value = prices.value(deposit_token0, amount);
    if deposit_value <= 0 {
        return Err(VaultError::DepositZero);
    }
    let tvl_before = tvl(env, &assets, &ladder, &prices);
    let tvl_after = tvl_before
        .checked_add(deposit_value)
        .ok_or(VaultError::MaxCapReached)?;
    if tvl_after > config.tvl_cap {
        return Err(VaultError::MaxCapReached);
    }

    // Fee is priced on the reserves before this deposit lands
    let (value0, value1) = side_values(env, &assets, &ladder, &prices);
    let fee_x4 = adjusted_fee(config.base_fee_x4, deposit_token0, value0, value1);

    // Shares are priced on the TVL before the deposit lands, idle balances included
    let supply = get_total_supply(env);
    let gross = if supply == 0 || tvl_before == 0 {
        if deposit_value < MIN_INITIAL_SHARES {
            return Err(VaultError::InsufficientDeposit);
        }
        deposit_value
    } else {
        mul_div_floor(deposit_value, supply, tvl_before)
    };
    let fee_shares = mul_div_floor(gross, fee_x4 as i128, FEE_SCALE_X4 as i128);
    let user_shares = gross - fee_shares;
    if user_shares <= 0 {
        return Err(VaultError::InsufficientDeposit);
    }

    token::Client::new(env, &token).transfer(&from, &env.current_contract_address(), &amount);
    deploy(env, &mut ladder, index, &assets, deposit_token0, amount)?;
    set_ladder(env, &ladder);

    shares::mint(env, &config.treasury, fee_shares)?;
    shares::mint(env, &from, user_shares)?;

    if get_last_active_index(env).is_none() {
        set_last_active_index(env, index);
    }

    events::deposit(env, &from, &token, amount, user_shares, fee_x4);
    Ok(user_shares)
}

/// Redeem vault shares for a single token
///
/// `share_amount == 0` redeems the caller's whole balance.
///
/// # Returns
/// Amount of `token` paid to `from` after the withdrawal fee
pub fn withdraw(
    env: &Env,
    from: Address,
    share_amount: i128,
    token: Address,
) -> Result<i128, VaultError> {
    from.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let assets = get_assets(env)?;
    let config = get_config(env)?;
    if !config.enabled {
        return Err(VaultError::PoolDisabled);
    }
    let withdraw_token0 = is_token0(&assets, &token)?;

    let balance = get_balance(env, &from);
    let share_amount = if share_amount == 0 { balance } else { share_amount };
    if share_amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    if share_amount == 0 {
        return Err(VaultError::WithdrawZero);
    }
    if share_amount > balance {
        return Err(VaultError::InsufficientShares);
    }

    let mut ladder = get_ladder(env)?;
    let prices = Prices::load(env, &assets)?;
    checked_spot_price(env, &assets, &config, &prices)?;

    // Withdrawing token0 moves exposure toward token1
    let (value0, value1) = side_values(env, &assets, &ladder, &prices);
    let fee_x4 = adjusted_fee(config.base_fee_x4, !withdraw_token0, value0, value1);

    let supply = get_total_supply(env);
    let (idle0, idle1) = idle_balances(env, &assets);
    let mut out0 = mul_div_floor(idle0, share_amount, supply);
    let mut out1 = mul_div_floor(idle1, share_amount, supply);

    for i in 0..ladder.len() {
        let mut range = ladder.get(i)?;
        let remove = mul_div_floor(range.balance, share_amount, supply);
        if remove == 0 {
            continue;
        }
        if remove > lending_available(env, &assets.lending_pool, &range.asset) {
            return Err(VaultError::InsufficientLiquidity);
        }
        let (amount0, amount1) = pull_from_range(env, &mut range, remove)?;
        out0 += amount0;
        out1 += amount1;
        ladder.set(i, range)?;
    }
    set_ladder(env, &ladder);

    let amount = if withdraw_token0 {
        out0 + swap_exact_input(env, &assets, &config, &prices, false, out1)?
    } else {
        out1 + swap_exact_input(env, &assets, &config, &prices, true, out0)?
    };

    let fee = mul_div_floor(amount, fee_x4 as i128, FEE_SCALE_X4 as i128);
    shares::burn(env, &from, share_amount)?;

    let token_client = token::Client::new(env, &token);
    let vault = env.current_contract_address();
    if fee > 0 {
        token_client.transfer(&vault, &config.treasury, &fee);
    }
    let paid = amount - fee;
    if paid > 0 {
        token_client.transfer(&vault, &from, &paid);
    }

    events::withdraw(env, &from, &token, share_amount, paid, fee);
    Ok(paid)
}

/// Share of `amount` that goes to the lower of two neighbor ranges so that the
/// ratio between their USD values is preserved.
///
/// Both empty splits evenly; a single empty side receives nothing.
pub fn split_amount(amount: i128, low_value: i128, high_value: i128) -> i128 {
    match (low_value > 0, high_value > 0) {
        (false, false) => amount / 2,
        (true, false) => amount,
        (false, true) => 0,
        (true, true) => mul_div_floor(amount, low_value, low_value + high_value),
    }
}

/// Push `amount` of one vault token, already held by the vault, into the two
/// neighbor ranges around `index`
pub fn deploy(
    env: &Env,
    ladder: &mut RangeLadder,
    index: u32,
    assets: &VaultAssets,
    is_token0: bool,
    amount: i128,
) -> Result<(), VaultError> {
    if amount <= 0 {
        return Ok(());
    }
    let token = if is_token0 { &assets.token0 } else { &assets.token1 };
    let (low, high) = ladder.neighbors(index, is_token0);

    let mut low_range = ladder.get(low)?;
    if low == high {
        push_into_range(env, &mut low_range, token, is_token0, amount)?;
        return ladder.set(low, low_range);
    }

    let mut high_range = ladder.get(high)?;
    let low_value = low_range.value(range_value_per_share(env, &low_range.asset));
    let high_value = high_range.value(range_value_per_share(env, &high_range.asset));
    let low_part = split_amount(amount, low_value, high_value);

    push_into_range(env, &mut low_range, token, is_token0, low_part)?;
    push_into_range(env, &mut high_range, token, is_token0, amount - low_part)?;
    ladder.set(low, low_range)?;
    ladder.set(high, high_range)
}

/// Transfer tokens to a range asset and credit the range shares it mints
fn push_into_range(
    env: &Env,
    range: &mut PriceRange,
    token: &Address,
    is_token0: bool,
    amount: i128,
) -> Result<(), VaultError> {
    if amount <= 0 {
        return Ok(());
    }
    let vault = env.current_contract_address();
    token::Client::new(env, token).transfer(&vault, &range.asset, &amount);

    let (amount0, amount1) = if is_token0 { (amount, 0) } else { (0, amount) };
    let minted = range_mint(env, &range.asset, &vault, amount0, amount1);
    range.credit(minted)
}

/// Burn range shares held by the vault, receiving the underlying tokens
pub fn pull_from_range(env: &Env, range: &mut PriceRange, shares: i128) -> Result<(i128, i128), VaultError> {
    range.debit(shares)?;
    let vault = env.current_contract_address();
    Ok(range_burn(env, &range.asset, &vault, shares, &vault))
}

/// Sell `amount_in` of one vault token for the other through the router.
///
/// The minimum output is the oracle-fair amount less the oracle tolerance.
fn swap_exact_input(
    env: &Env,
    assets: &VaultAssets,
    config: &VaultConfig,
    prices: &Prices,
    token0_in: bool,
    amount_in: i128,
) -> Result<i128, VaultError> {
    if amount_in <= 0 {
        return Ok(0);
    }
    let (token_in, token_out) = if token0_in {
        (assets.token0.clone(), assets.token1.clone())
    } else {
        (assets.token1.clone(), assets.token0.clone())
    };
    let expected = prices.convert(token0_in, amount_in);
    let min_out = mul_div_floor(
        expected,
        (BPS_SCALE - config.oracle_tolerance_bps) as i128,
        BPS_SCALE as i128,
    );

    let vault = env.current_contract_address();
    let params = ExactInputSingleParams {
        token_in: token_in.clone(),
        token_out,
        fee: pool_fee(env, &assets.pool),
        recipient: vault.clone(),
        deadline: env.ledger().timestamp(),
        amount_in,
        amount_out_minimum: min_out,
        sqrt_price_limit_x96: 0,
    };

    // The router pulls token_in from the recipient into itself
    env.authorize_as_current_contract(vec![
        env,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token_in,
                fn_name: Symbol::new(env, "transfer"),
                args: vec![
                    env,
                    vault.into_val(env),
                    assets.router.clone().into_val(env),
                    amount_in.into_val(env),
                ],
            },
            sub_invocations: vec![env],
        }),
    ]);

    let amount_out = router_exact_input_single(env, &assets.router, &params);
    if amount_out < min_out {
        return Err(VaultError::SlippageExceeded);
    }
    Ok(amount_out)
}
