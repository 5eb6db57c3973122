use crate::interfaces::{oracle_price, pool_sqrt_price_x96, range_token_amounts, range_value_per_share};
use soroban_sdk::{log, token, Address, Env};
use vault_math::{mul_div_floor, oracle_price_x8, pool_matches_oracle, deviation_bps, spot_price_x8};
use vault_types::{RangeLadder, VaultAssets, VaultConfig, VaultError};

/// Oracle prices and decimals of the vault's two tokens, read once per call
#[derive(Clone, Debug)]
pub struct Prices {
    pub price0: i128,
    pub price1: i128,
    pub decimals0: u32,
    pub decimals1: u32,
}

impl Prices {
    pub fn load(env: &Env, assets: &VaultAssets) -> Result<Self, VaultError> {
        let price0 = oracle_price(env, &assets.oracle, &assets.token0);
        let price1 = oracle_price(env, &assets.oracle, &assets.token1);
        if price0 <= 0 || price1 <= 0 {
            return Err(VaultError::OracleError);
        }
        let (decimals0, decimals1) = token_decimals(env, assets);
        Ok(Self {
            price0,
            price1,
            decimals0,
            decimals1,
        })
    }

    /// USD value (X8) of a token0 amount
    pub fn value0(&self, amount: i128) -> i128 {
        mul_div_floor(amount, self.price0, 10i128.pow(self.decimals0))
    }

    /// USD value (X8) of a token1 amount
    pub fn value1(&self, amount: i128) -> i128 {
        mul_div_floor(amount, self.price1, 10i128.pow(self.decimals1))
    }

    pub fn value(&self, is_token0: bool, amount: i128) -> i128 {
        if is_token0 {
            self.value0(amount)
        } else {
            self.value1(amount)
        }
    }

    /// Amount of the other token worth the same as `amount` of this one
    pub fn convert(&self, from_token0: bool, amount: i128) -> i128 {
        let usd = self.value(from_token0, amount);
        if from_token0 {
            mul_div_floor(usd, 10i128.pow(self.decimals1), self.price1)
        } else {
            mul_div_floor(usd, 10i128.pow(self.decimals0), self.price0)
        }
    }

    /// Oracle price of token0 in token1 (X8)
    pub fn price_x8(&self) -> i128 {
        oracle_price_x8(self.price0, self.price1)
    }
}

pub fn token_decimals(env: &Env, assets: &VaultAssets) -> (u32, u32) {
    (
        token::Client::new(env, &assets.token0).decimals(),
        token::Client::new(env, &assets.token1).decimals(),
    )
}

/// Resolve `token` to its side; anything but token0/token1 is rejected
pub fn is_token0(assets: &VaultAssets, token: &Address) -> Result<bool, VaultError> {
    if token == &assets.token0 {
        Ok(true)
    } else if token == &assets.token1 {
        Ok(false)
    } else {
        Err(VaultError::InvalidAsset)
    }
}

/// AMM spot price of token0 in token1 (X8)
pub fn spot_price(env: &Env, assets: &VaultAssets) -> i128 {
    let (decimals0, decimals1) = token_decimals(env, assets);
    let sqrt_price_x96 = pool_sqrt_price_x96(env, &assets.pool);
    spot_price_x8(env, sqrt_price_x96, decimals0, decimals1)
}

/// Spot price, provided it agrees with the oracle within tolerance
pub fn checked_spot_price(
    env: &Env,
    assets: &VaultAssets,
    config: &VaultConfig,
    prices: &Prices,
) -> Result<i128, VaultError> {
    let spot = spot_price(env, assets);
    let oracle = prices.price_x8();
    if !pool_matches_oracle(spot, oracle, config.oracle_tolerance_bps) {
        log!(
            env,
            "pool/oracle mismatch",
            spot,
            oracle,
            deviation_bps(spot, oracle)
        );
        return Err(VaultError::OracleError);
    }
    Ok(spot)
}

/// Vault holdings of token0 and token1 not deployed in any range
pub fn idle_balances(env: &Env, assets: &VaultAssets) -> (i128, i128) {
    let vault = env.current_contract_address();
    (
        token::Client::new(env, &assets.token0).balance(&vault),
        token::Client::new(env, &assets.token1).balance(&vault),
    )
}

/// Underlying token0/token1 held by the vault, in ranges and idle
pub fn reserves(env: &Env, assets: &VaultAssets, ladder: &RangeLadder) -> (i128, i128) {
    let (mut amount0, mut amount1) = idle_balances(env, assets);
    for range in ladder.ranges.iter() {
        if range.balance == 0 {
            continue;
        }
        let (a0, a1) = range_token_amounts(env, &range.asset, range.balance);
        amount0 += a0;
        amount1 += a1;
    }
    (amount0, amount1)
}

/// USD value (X8) of every range balance plus idle tokens
pub fn tvl(env: &Env, assets: &VaultAssets, ladder: &RangeLadder, prices: &Prices) -> i128 {
    let (idle0, idle1) = idle_balances(env, assets);
    let mut total = prices.value0(idle0) + prices.value1(idle1);
    for range in ladder.ranges.iter() {
        if range.balance == 0 {
            continue;
        }
        total += range.value(range_value_per_share(env, &range.asset));
    }
    total
}

/// USD value (X8) held on each token side, the input of the fee curve
pub fn side_values(
    env: &Env,
    assets: &VaultAssets,
    ladder: &RangeLadder,
    prices: &Prices,
) -> (i128, i128) {
    let (amount0, amount1) = reserves(env, assets, ladder);
    (prices.value0(amount0), prices.value1(amount1))
}
