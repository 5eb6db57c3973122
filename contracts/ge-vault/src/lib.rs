#![no_std]

mod events;
mod guard;
mod interfaces;
mod invariants;
mod ladder;
mod liquidity;
mod rebalance;
mod shares;
mod storage;
mod valuation;

#[cfg(feature = "certora")]
pub mod certora_specs;

#[cfg(test)]
mod testutils;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use storage::{
    get_allowance, get_assets, get_balance, get_config, get_ladder, get_metadata,
    get_total_supply, is_initialized, set_assets, set_config, set_ladder, set_metadata,
};
use valuation::{side_values, tvl, Prices};
use vault_math::{adjusted_fee, mul_div_floor, pool_matches_oracle};
use vault_types::{
    PriceRange, RangeLadder, RebalanceOutcome, ShareMetadata, VaultAssets, VaultConfig,
    VaultError, DEFAULT_MAX_TICKS, MAX_BASE_FEE_X4, MAX_TICKS_LIMIT, PRICE_SCALE,
    SHARE_DECIMALS,
};

#[contract]
pub struct GeVault;

#[contractimpl]
impl GeVault {
    /// Initialize the vault with its collaborators, configuration and share token metadata
    pub fn initialize(
        env: Env,
        assets: VaultAssets,
        config: VaultConfig,
        name: String,
        symbol: String,
    ) -> Result<(), VaultError> {
        if is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        if config.treasury == env.current_contract_address() {
            return Err(VaultError::InvalidTreasury);
        }
        if assets.token0 == assets.token1 {
            return Err(VaultError::InvalidAsset);
        }
        let (pool_token0, pool_token1) = interfaces::pool_tokens(&env, &assets.pool);
        if pool_token0 != assets.token0 || pool_token1 != assets.token1 {
            return Err(VaultError::InvalidAsset);
        }
        config.validate()?;

        set_assets(&env, &assets);
        set_config(&env, &config);
        set_ladder(&env, &RangeLadder::new(&env, DEFAULT_MAX_TICKS));
        set_metadata(
            &env,
            &ShareMetadata {
                name,
                symbol,
                decimals: SHARE_DECIMALS,
            },
        );

        events::initialized(&env, &assets.token0, &assets.token1, &assets.pool);
        Ok(())
    }

    /// Deposit `amount` of `token` (token0 or token1)
    ///
    /// # Returns
    /// Vault shares minted to `from`
    pub fn deposit(env: Env, from: Address, token: Address, amount: i128) -> Result<i128, VaultError> {
        liquidity::deposit(&env, from, token, amount)
    }

    /// Burn `share_amount` vault shares (0 = all) and receive `token`
    ///
    /// # Returns
    /// Amount of `token` received
    pub fn withdraw(
        env: Env,
        from: Address,
        share_amount: i128,
        token: Address,
    ) -> Result<i128, VaultError> {
        liquidity::withdraw(&env, from, share_amount, token)
    }

    /// Follow the market price to a new active range (operator only)
    pub fn rebalance(env: Env) -> Result<RebalanceOutcome, VaultError> {
        rebalance::rebalance(&env)
    }

    // === Ladder Management ===

    /// Add a range asset above the current top range
    ///
    /// # Returns
    /// New ladder length
    pub fn push_tick(env: Env, range_asset: Address) -> Result<u32, VaultError> {
        get_config(&env)?.admin.require_auth();
        ladder::push_tick(&env, range_asset)
    }

    /// Add a range asset below the current bottom range
    ///
    /// # Returns
    /// New ladder length
    pub fn shift_tick(env: Env, range_asset: Address) -> Result<u32, VaultError> {
        get_config(&env)?.admin.require_auth();
        ladder::shift_tick(&env, range_asset)
    }

    // === Admin ===

    pub fn set_enabled(env: Env, enabled: bool) -> Result<(), VaultError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        config.enabled = enabled;
        set_config(&env, &config);
        events::enabled(&env, enabled);
        Ok(())
    }

    /// Set the maximum TVL (USD, 8 decimals)
    pub fn set_tvl_cap(env: Env, tvl_cap: i128) -> Result<(), VaultError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        if tvl_cap < 0 {
            return Err(VaultError::InvalidAmount);
        }
        config.tvl_cap = tvl_cap;
        set_config(&env, &config);
        events::tvl_cap(&env, tvl_cap);
        Ok(())
    }

    pub fn set_base_fee(env: Env, base_fee_x4: u32) -> Result<(), VaultError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        if base_fee_x4 > MAX_BASE_FEE_X4 {
            return Err(VaultError::InvalidFee);
        }
        config.base_fee_x4 = base_fee_x4;
        set_config(&env, &config);
        events::base_fee(&env, base_fee_x4);
        Ok(())
    }

    pub fn set_treasury(env: Env, treasury: Address) -> Result<(), VaultError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        if treasury == env.current_contract_address() {
            return Err(VaultError::InvalidTreasury);
        }
        config.treasury = treasury.clone();
        set_config(&env, &config);
        events::treasury(&env, &treasury);
        Ok(())
    }

    pub fn set_operator(env: Env, operator: Address) -> Result<(), VaultError> {
        let mut config = get_config(&env)?;
        config.admin.require_auth();
        config.operator = operator.clone();
        set_config(&env, &config);
        events::operator(&env, &operator);
        Ok(())
    }

    /// Change the ladder growth bound
    pub fn set_max_ticks(env: Env, max_ticks: u32) -> Result<(), VaultError> {
        get_config(&env)?.admin.require_auth();
        let mut ladder = get_ladder(&env)?;
        if max_ticks < ladder.len() || max_ticks > MAX_TICKS_LIMIT {
            return Err(VaultError::InvalidAmount);
        }
        ladder.max_len = max_ticks;
        set_ladder(&env, &ladder);
        events::max_ticks(&env, max_ticks);
        Ok(())
    }

    // === Vault Shares ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), VaultError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    /// Let `spender` move up to `amount` of `from`'s shares until `expiration_ledger`
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), VaultError> {
        from.require_auth();
        shares::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VaultError> {
        spender.require_auth();
        shares::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        from.require_auth();
        shares::burn_shares(&env, &from, amount)
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), VaultError> {
        spender.require_auth();
        shares::burn_from(&env, &spender, &from, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, VaultError> {
        Ok(get_metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, VaultError> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, VaultError> {
        Ok(get_metadata(&env)?.symbol)
    }

    /// Value of one whole vault share (USD, 8 decimals); 0 while empty
    pub fn latest_answer(env: Env) -> Result<i128, VaultError> {
        let supply = get_total_supply(&env);
        if supply == 0 {
            return Ok(0);
        }
        let tvl = Self::get_tvl(env)?;
        Ok(mul_div_floor(tvl, PRICE_SCALE, supply))
    }

    // === View Functions ===

    /// Total value locked (USD, 8 decimals)
    pub fn get_tvl(env: Env) -> Result<i128, VaultError> {
        let assets = get_assets(&env)?;
        let ladder = get_ladder(&env)?;
        let prices = Prices::load(&env, &assets)?;
        Ok(tvl(&env, &assets, &ladder, &prices))
    }

    /// Underlying (amount0, amount1) held in ranges and idle
    pub fn get_reserves(env: Env) -> Result<(i128, i128), VaultError> {
        let assets = get_assets(&env)?;
        let ladder = get_ladder(&env)?;
        Ok(valuation::reserves(&env, &assets, &ladder))
    }

    /// Range shares the vault holds in the range at `index`
    pub fn get_tick_balance(env: Env, index: u32) -> Result<i128, VaultError> {
        Ok(get_ladder(&env)?.get(index)?.balance)
    }

    pub fn get_tick(env: Env, index: u32) -> Result<PriceRange, VaultError> {
        get_ladder(&env)?.get(index)
    }

    pub fn get_tick_length(env: Env) -> Result<u32, VaultError> {
        Ok(get_ladder(&env)?.len())
    }

    pub fn get_ticks(env: Env) -> Result<Vec<PriceRange>, VaultError> {
        Ok(get_ladder(&env)?.ranges)
    }

    /// Index of the range containing the current AMM price
    pub fn get_active_tick_index(env: Env) -> Result<u32, VaultError> {
        let assets = get_assets(&env)?;
        let ladder = get_ladder(&env)?;
        ladder::current_active_index(&env, &assets, &ladder)
    }

    /// Fee (1/10000) an operation increasing token0 (or token1) would pay now
    pub fn get_adjusted_base_fee(env: Env, increase_token0: bool) -> Result<u32, VaultError> {
        let assets = get_assets(&env)?;
        let config = get_config(&env)?;
        let ladder = get_ladder(&env)?;
        let prices = Prices::load(&env, &assets)?;
        let (value0, value1) = side_values(&env, &assets, &ladder, &prices);
        Ok(adjusted_fee(config.base_fee_x4, increase_token0, value0, value1))
    }

    /// True when the AMM spot price is within tolerance of the oracle
    pub fn pool_matches_oracle(env: Env) -> Result<bool, VaultError> {
        let assets = get_assets(&env)?;
        let config = get_config(&env)?;
        let prices = match Prices::load(&env, &assets) {
            Ok(prices) => prices,
            Err(VaultError::OracleError) => return Ok(false),
            Err(e) => return Err(e),
        };
        let spot = valuation::spot_price(&env, &assets);
        Ok(pool_matches_oracle(spot, prices.price_x8(), config.oracle_tolerance_bps))
    }

    pub fn get_config(env: Env) -> Result<VaultConfig, VaultError> {
        get_config(&env)
    }

    pub fn get_assets(env: Env) -> Result<VaultAssets, VaultError> {
        get_assets(&env)
    }
}
