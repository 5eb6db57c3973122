//! Mock collaborators and a ready-made vault for contract tests.
//!
//! Tokens are Stellar Asset Contracts (7 decimals). The range assets, router
//! and lending pool value everything at the mock oracle's prices.

use crate::{GeVault, GeVaultClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{self, StellarAssetClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};
use vault_math::{mul_div_floor, sqrt_price_x96_from_price_x8};
use vault_types::{
    ExactInputSingleParams, VaultAssets, VaultConfig, BPS_SCALE, DEFAULT_ORACLE_TOLERANCE_BPS,
    PRICE_SCALE, SHARE_SCALE,
};

pub const WETH_PRICE: i128 = 1_620_00000000;
pub const USDC_PRICE: i128 = 1_00000000;
/// One whole unit of a 7-decimal token
pub const UNIT: i128 = 10_000_000;
pub const BOUNDS: [i128; 6] = [
    1_500_00000000,
    1_600_00000000,
    1_700_00000000,
    1_800_00000000,
    1_900_00000000,
    2_000_00000000,
];

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Price(Address),
    Available(Address),
    Range,
    Reserves,
    TotalShares,
    Pool,
    Router,
}

fn usd_value(env: &Env, oracle: &Address, token: &Address, amount: i128) -> i128 {
    let price = MockOracleClient::new(env, oracle).get_asset_price(token);
    let decimals = token::Client::new(env, token).decimals();
    mul_div_floor(amount, price, 10i128.pow(decimals))
}

// === Oracle ===

#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_price(env: Env, asset: Address, price: i128) {
        env.storage().instance().set(&MockKey::Price(asset), &price);
    }

    pub fn get_asset_price(env: Env, asset: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Price(asset))
            .unwrap_or(0)
    }
}

// === AMM pool ===

#[contracttype]
#[derive(Clone)]
pub struct MockPoolState {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub sqrt_price_x96: u128,
}

#[contract]
pub struct MockPool;

#[contractimpl]
impl MockPool {
    pub fn init(env: Env, token0: Address, token1: Address, fee: u32, sqrt_price_x96: u128) {
        let state = MockPoolState {
            token0,
            token1,
            fee,
            sqrt_price_x96,
        };
        env.storage().instance().set(&MockKey::Pool, &state);
    }

    /// Stand-in for a large directional trade
    pub fn set_sqrt_price_x96(env: Env, sqrt_price_x96: u128) {
        let mut state = Self::state(&env);
        state.sqrt_price_x96 = sqrt_price_x96;
        env.storage().instance().set(&MockKey::Pool, &state);
    }

    pub fn sqrt_price_x96(env: Env) -> u128 {
        Self::state(&env).sqrt_price_x96
    }

    pub fn token0(env: Env) -> Address {
        Self::state(&env).token0
    }

    pub fn token1(env: Env) -> Address {
        Self::state(&env).token1
    }

    pub fn fee(env: Env) -> u32 {
        Self::state(&env).fee
    }
}

impl MockPool {
    fn state(env: &Env) -> MockPoolState {
        env.storage().instance().get(&MockKey::Pool).unwrap()
    }
}

// === Range asset ===

#[contracttype]
#[derive(Clone)]
pub struct MockRangeConfig {
    pub token0: Address,
    pub token1: Address,
    pub lower: i128,
    pub upper: i128,
    pub oracle: Address,
}

/// Tokenised price range: holds token0/token1 and issues shares against
/// their oracle value, starting at $1 per whole share.
#[contract]
pub struct MockRange;

#[contractimpl]
impl MockRange {
    pub fn init(env: Env, token0: Address, token1: Address, lower: i128, upper: i128, oracle: Address) {
        let config = MockRangeConfig {
            token0,
            token1,
            lower,
            upper,
            oracle,
        };
        env.storage().instance().set(&MockKey::Range, &config);
    }

    pub fn lower_price(env: Env) -> i128 {
        Self::config(&env).lower
    }

    pub fn upper_price(env: Env) -> i128 {
        Self::config(&env).upper
    }

    pub fn token0(env: Env) -> Address {
        Self::config(&env).token0
    }

    pub fn token1(env: Env) -> Address {
        Self::config(&env).token1
    }

    pub fn total_shares(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::TotalShares)
            .unwrap_or(0)
    }

    pub fn value_per_share(env: Env) -> i128 {
        let total = Self::total_shares(env.clone());
        if total == 0 {
            return PRICE_SCALE;
        }
        mul_div_floor(Self::reserves_value(&env), SHARE_SCALE, total)
    }

    pub fn token_amounts(env: Env, shares: i128) -> (i128, i128) {
        let total = Self::total_shares(env.clone());
        if total == 0 {
            return (0, 0);
        }
        let (reserve0, reserve1) = Self::reserves(&env);
        (
            mul_div_floor(reserve0, shares, total),
            mul_div_floor(reserve1, shares, total),
        )
    }

    /// Issue shares for tokens transferred in beforehand
    pub fn mint(env: Env, to: Address, amount0: i128, amount1: i128) -> i128 {
        let _ = to;
        let config = Self::config(&env);
        let value = usd_value(&env, &config.oracle, &config.token0, amount0)
            + usd_value(&env, &config.oracle, &config.token1, amount1);
        let shares = mul_div_floor(value, SHARE_SCALE, Self::value_per_share(env.clone()));

        let (reserve0, reserve1) = Self::reserves(&env);
        env.storage()
            .instance()
            .set(&MockKey::Reserves, &(reserve0 + amount0, reserve1 + amount1));
        let total = Self::total_shares(env.clone());
        env.storage()
            .instance()
            .set(&MockKey::TotalShares, &(total + shares));
        shares
    }

    pub fn burn(env: Env, from: Address, shares: i128, to: Address) -> (i128, i128) {
        from.require_auth();
        let (amount0, amount1) = Self::token_amounts(env.clone(), shares);
        let config = Self::config(&env);
        let (reserve0, reserve1) = Self::reserves(&env);
        env.storage()
            .instance()
            .set(&MockKey::Reserves, &(reserve0 - amount0, reserve1 - amount1));
        let total = Self::total_shares(env.clone());
        env.storage()
            .instance()
            .set(&MockKey::TotalShares, &(total - shares));

        let this = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&this, &to, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&this, &to, &amount1);
        }
        (amount0, amount1)
    }
}

impl MockRange {
    fn config(env: &Env) -> MockRangeConfig {
        env.storage().instance().get(&MockKey::Range).unwrap()
    }

    fn reserves(env: &Env) -> (i128, i128) {
        env.storage()
            .instance()
            .get(&MockKey::Reserves)
            .unwrap_or((0, 0))
    }

    fn reserves_value(env: &Env) -> i128 {
        let config = Self::config(env);
        let (reserve0, reserve1) = Self::reserves(env);
        usd_value(env, &config.oracle, &config.token0, reserve0)
            + usd_value(env, &config.oracle, &config.token1, reserve1)
    }
}

// === Lending pool ===

/// Reports how many shares of each range asset are not borrowed out.
/// Unset assets are fully available.
#[contract]
pub struct MockLending;

#[contractimpl]
impl MockLending {
    pub fn set_available(env: Env, asset: Address, amount: i128) {
        env.storage()
            .instance()
            .set(&MockKey::Available(asset), &amount);
    }

    pub fn available_liquidity(env: Env, asset: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Available(asset))
            .unwrap_or(i128::MAX)
    }
}

// === Router ===

/// Swaps at the oracle price less a configurable slippage, from its own
/// token inventory
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn init(env: Env, oracle: Address, slippage_bps: u32) {
        env.storage()
            .instance()
            .set(&MockKey::Router, &(oracle, slippage_bps));
    }

    pub fn set_slippage_bps(env: Env, slippage_bps: u32) {
        let (oracle, _): (Address, u32) = env.storage().instance().get(&MockKey::Router).unwrap();
        env.storage()
            .instance()
            .set(&MockKey::Router, &(oracle, slippage_bps));
    }

    pub fn exact_input_single(env: Env, params: ExactInputSingleParams) -> i128 {
        params.recipient.require_auth();
        let (oracle, slippage_bps): (Address, u32) =
            env.storage().instance().get(&MockKey::Router).unwrap();

        let this = env.current_contract_address();
        token::Client::new(&env, &params.token_in).transfer(&params.recipient, &this, &params.amount_in);

        let usd = usd_value(&env, &oracle, &params.token_in, params.amount_in);
        let price_out = MockOracleClient::new(&env, &oracle).get_asset_price(&params.token_out);
        let decimals_out = token::Client::new(&env, &params.token_out).decimals();
        let fair = mul_div_floor(usd, 10i128.pow(decimals_out), price_out);
        let amount_out = mul_div_floor(fair, (BPS_SCALE - slippage_bps) as i128, BPS_SCALE as i128);

        token::Client::new(&env, &params.token_out).transfer(&this, &params.recipient, &amount_out);
        amount_out
    }
}

// === Vault fixture ===

pub struct VaultTest<'a> {
    pub env: Env,
    pub vault: GeVaultClient<'a>,
    pub admin: Address,
    pub treasury: Address,
    pub user: Address,
    /// WETH
    pub token0: Address,
    /// USDC
    pub token1: Address,
    pub oracle: MockOracleClient<'a>,
    pub pool: MockPoolClient<'a>,
    pub lending: MockLendingClient<'a>,
    pub router: MockRouterClient<'a>,
    pub ranges: Vec<Address>,
}

impl<'a> VaultTest<'a> {
    /// Vault wired to mocks, initialized but with an empty ladder
    pub fn new(base_fee_x4: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();

        let admin = Address::generate(&env);
        let treasury = Address::generate(&env);
        let user = Address::generate(&env);

        let token0 = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let token1 = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();

        let oracle = MockOracleClient::new(&env, &env.register(MockOracle, ()));
        oracle.set_price(&token0, &WETH_PRICE);
        oracle.set_price(&token1, &USDC_PRICE);

        let pool = MockPoolClient::new(&env, &env.register(MockPool, ()));
        pool.init(
            &token0,
            &token1,
            &500,
            &sqrt_price_x96_from_price_x8(&env, WETH_PRICE, 7, 7),
        );

        let lending = MockLendingClient::new(&env, &env.register(MockLending, ()));

        let router = MockRouterClient::new(&env, &env.register(MockRouter, ()));
        router.init(&oracle.address, &0);
        StellarAssetClient::new(&env, &token0).mint(&router.address, &(1_000 * UNIT));
        StellarAssetClient::new(&env, &token1).mint(&router.address, &(10_000_000 * UNIT));

        StellarAssetClient::new(&env, &token0).mint(&user, &(100 * UNIT));
        StellarAssetClient::new(&env, &token1).mint(&user, &(1_000_000 * UNIT));

        let vault = GeVaultClient::new(&env, &env.register(GeVault, ()));
        let assets = VaultAssets {
            token0: token0.clone(),
            token1: token1.clone(),
            pool: pool.address.clone(),
            oracle: oracle.address.clone(),
            lending_pool: lending.address.clone(),
            router: router.address.clone(),
        };
        let (name, symbol) = share_metadata(&env);
        vault.initialize(
            &assets,
            &default_config(&admin, &treasury, base_fee_x4),
            &name,
            &symbol,
        );

        let ranges = Vec::new(&env);
        Self {
            env,
            vault,
            admin,
            treasury,
            user,
            token0,
            token1,
            oracle,
            pool,
            lending,
            router,
            ranges,
        }
    }

    /// Vault with five contiguous ranges over [1500, 2000], market at 1620
    pub fn with_ladder(base_fee_x4: u32) -> Self {
        let mut test = Self::new(base_fee_x4);
        for i in 0..5 {
            let range = test.new_range(BOUNDS[i], BOUNDS[i + 1]);
            test.vault.push_tick(&range);
            test.ranges.push_back(range);
        }
        test
    }

    /// Deploy a range asset trading the vault's pair
    pub fn new_range(&self, lower: i128, upper: i128) -> Address {
        let range = MockRangeClient::new(&self.env, &self.env.register(MockRange, ()));
        range.init(&self.token0, &self.token1, &lower, &upper, &self.oracle.address);
        range.address
    }

    pub fn range(&self, index: u32) -> MockRangeClient<'a> {
        MockRangeClient::new(&self.env, &self.ranges.get(index).unwrap())
    }

    /// USD value (X8) of the vault's balance in the range at `index`
    pub fn range_value(&self, index: u32) -> i128 {
        let balance = self.vault.get_tick_balance(&index);
        mul_div_floor(balance, self.range(index).value_per_share(), SHARE_SCALE)
    }

    /// Move the AMM price of WETH in USDC without touching the oracle
    pub fn set_market_price(&self, price_x8: i128) {
        self.pool
            .set_sqrt_price_x96(&sqrt_price_x96_from_price_x8(&self.env, price_x8, 7, 7));
    }

    pub fn set_oracle_price(&self, price_x8: i128) {
        self.oracle.set_price(&self.token0, &price_x8);
    }

    pub fn balance0(&self, id: &Address) -> i128 {
        token::Client::new(&self.env, &self.token0).balance(id)
    }

    pub fn balance1(&self, id: &Address) -> i128 {
        token::Client::new(&self.env, &self.token1).balance(id)
    }
}

pub fn share_metadata(env: &Env) -> (String, String) {
    (
        String::from_str(env, "GeVault WETHUSDC"),
        String::from_str(env, "GEV-ETHUSDC"),
    )
}

pub fn default_config(admin: &Address, treasury: &Address, base_fee_x4: u32) -> VaultConfig {
    VaultConfig {
        admin: admin.clone(),
        operator: admin.clone(),
        treasury: treasury.clone(),
        enabled: true,
        tvl_cap: 1_000_000_000_00000000,
        base_fee_x4,
        oracle_tolerance_bps: DEFAULT_ORACLE_TOLERANCE_BPS,
    }
}

/// True if the two values are within 1% of each other
pub fn nearly_equal(a: i128, b: i128) -> bool {
    if b == 0 {
        return a == 0;
    }
    (a - b).abs() * 100 < b.abs()
}
