use crate::events;
use crate::guard::ReentrancyGuard;
use crate::interfaces::{lending_available, range_value_per_share};
use crate::ladder::current_active_index;
use crate::liquidity::{deploy, pull_from_range};
use crate::storage::{get_assets, get_config, get_ladder, get_last_active_index, set_ladder, set_last_active_index};
use crate::valuation::{checked_spot_price, idle_balances, Prices};
use soroban_sdk::{log, Env};
use vault_types::{RebalanceOutcome, VaultError};

/// Move capital out of ranges that are no longer around the market price
/// and, while enabled, redeploy it around the new active index.
///
/// Range shares that are lent out cannot be burned; they stay where they are
/// and their value is reported as `PartiallyMoved`.
pub fn rebalance(env: &Env) -> Result<RebalanceOutcome, VaultError> {
    let config = get_config(env)?;
    config.operator.require_auth();
    let _guard = ReentrancyGuard::acquire(env)?;

    let assets = get_assets(env)?;
    let mut ladder = get_ladder(env)?;
    let current = current_active_index(env, &assets, &ladder)?;
    let previous = get_last_active_index(env);
    if previous == Some(current) {
        return Ok(RebalanceOutcome::Unchanged);
    }

    let prices = Prices::load(env, &assets)?;
    checked_spot_price(env, &assets, &config, &prices)?;

    let (low, high) = ladder.window(current);
    let mut stranded = 0i128;
    for i in 0..ladder.len() {
        if i >= low && i <= high {
            continue;
        }
        let mut range = ladder.get(i)?;
        if range.balance == 0 {
            continue;
        }
        let available = lending_available(env, &assets.lending_pool, &range.asset).max(0);
        let movable = range.balance.min(available);
        if movable > 0 {
            pull_from_range(env, &mut range, movable)?;
        }
        if range.balance > 0 {
            let value = range.value(range_value_per_share(env, &range.asset));
            log!(env, "range stranded by borrows", i, range.balance, value);
            stranded += value;
        }
        ladder.set(i, range)?;
    }

    if config.enabled {
        let (idle0, idle1) = idle_balances(env, &assets);
        deploy(env, &mut ladder, current, &assets, true, idle0)?;
        deploy(env, &mut ladder, current, &assets, false, idle1)?;
    }
    set_ladder(env, &ladder);
    set_last_active_index(env, current);

    let outcome = if stranded == 0 {
        RebalanceOutcome::FullyMoved
    } else {
        RebalanceOutcome::PartiallyMoved(stranded)
    };
    events::rebalance(env, previous, current, &outcome);
    Ok(outcome)
}
