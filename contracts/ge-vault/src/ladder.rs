use crate::events;
use crate::interfaces::{range_bounds, range_tokens};
use crate::storage::{get_assets, get_ladder, get_last_active_index, set_ladder, set_last_active_index};
use crate::valuation::spot_price;
use soroban_sdk::{Address, Env};
use vault_types::{PriceRange, RangeLadder, VaultAssets, VaultError};

/// Build a ladder entry from a range asset, checking it trades the vault's pair
pub fn load_range(env: &Env, assets: &VaultAssets, range_asset: &Address) -> Result<PriceRange, VaultError> {
    let (token0, token1) = range_tokens(env, range_asset);
    if token0 != assets.token0 || token1 != assets.token1 {
        return Err(VaultError::InvalidRange);
    }
    let (lower, upper) = range_bounds(env, range_asset);
    PriceRange::new(range_asset.clone(), lower, upper)
}

/// Append a range above the ladder's top. Returns the new ladder length.
pub fn push_tick(env: &Env, range_asset: Address) -> Result<u32, VaultError> {
    let assets = get_assets(env)?;
    let mut ladder = get_ladder(env)?;
    let range = load_range(env, &assets, &range_asset)?;
    let (lower, upper) = (range.lower, range.upper);

    ladder.append_high(range)?;
    set_ladder(env, &ladder);

    events::tick_pushed(env, &range_asset, lower, upper);
    Ok(ladder.len())
}

/// Insert a range below the ladder's bottom. Returns the new ladder length.
pub fn shift_tick(env: &Env, range_asset: Address) -> Result<u32, VaultError> {
    let assets = get_assets(env)?;
    let mut ladder = get_ladder(env)?;
    let range = load_range(env, &assets, &range_asset)?;
    let (lower, upper) = (range.lower, range.upper);

    ladder.prepend_low(range)?;
    set_ladder(env, &ladder);

    // Every existing range moved up by one, so did the recorded index
    if let Some(index) = get_last_active_index(env) {
        set_last_active_index(env, index + 1);
    }

    events::tick_shifted(env, &range_asset, lower, upper);
    Ok(ladder.len())
}

/// Index of the range containing the AMM spot price
pub fn current_active_index(env: &Env, assets: &VaultAssets, ladder: &RangeLadder) -> Result<u32, VaultError> {
    if ladder.is_empty() {
        return Err(VaultError::LadderNotInitialized);
    }
    ladder.active_index(spot_price(env, assets))
}
