use soroban_sdk::{contracttype, Address, Env};
use vault_types::{RangeLadder, ShareMetadata, VaultAssets, VaultConfig, VaultError};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for vault operations:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - The whole ladder (~100 bytes per range) is a single persistent entry,
//   so MAX_TICKS_LIMIT ranges stay far below the entry size limit
// - Each share holder is a separate persistent entry
// - Allowances are temporary entries living until their expiration ledger
// - Wiring, config, supply and the lock live in instance storage
//
// Cross-contract call budget:
// - Withdraw and rebalance touch every range asset (value, burn) plus the
//   lending pool once per range, which is why the ladder is bounded
// ============================================================================

/// Owner/spender pair of a share allowance
#[contracttype]
#[derive(Clone)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Storage keys for the vault contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collaborator addresses (Instance storage)
    Assets,
    /// Admin-mutable configuration (Instance storage)
    Config,
    /// Ordered price ranges with their balances (Persistent storage)
    Ladder,
    /// Vault share supply (Instance storage)
    TotalSupply,
    /// Vault share balance per holder (Persistent storage)
    Balance(Address),
    /// Active index capital was last deployed around (Instance storage)
    LastActiveIndex,
    /// Reentrancy lock (Instance storage)
    Lock,
    /// Share token name, symbol and decimals (Instance storage)
    Metadata,
    /// Share allowance (Temporary storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Assets)
}

// === Assets ===

pub fn get_assets(env: &Env) -> Result<VaultAssets, VaultError> {
    let assets = env
        .storage()
        .instance()
        .get(&DataKey::Assets)
        .ok_or(VaultError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(assets)
}

pub fn set_assets(env: &Env, assets: &VaultAssets) {
    env.storage().instance().set(&DataKey::Assets, assets);
    extend_instance_ttl(env);
}

// === Config ===

pub fn get_config(env: &Env) -> Result<VaultConfig, VaultError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VaultError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Ladder ===

pub fn get_ladder(env: &Env) -> Result<RangeLadder, VaultError> {
    let key = DataKey::Ladder;
    let ladder = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(VaultError::NotInitialized)?;
    extend_persistent_ttl(env, &key);
    Ok(ladder)
}

pub fn set_ladder(env: &Env, ladder: &RangeLadder) {
    let key = DataKey::Ladder;
    env.storage().persistent().set(&key, ladder);
    extend_persistent_ttl(env, &key);
}

// === Shares ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> Result<ShareMetadata, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &ShareMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

// === Allowances ===

/// Spendable allowance; an expired entry reads as zero
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => {
            allowance.amount
        }
        _ => 0,
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), VaultError> {
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(VaultError::InvalidExpiration);
    }
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);
    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

/// Consume `amount` of the allowance `from` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let Some(allowance) = env.storage().temporary().get::<_, AllowanceValue>(&key) else {
        return Err(VaultError::InsufficientAllowance);
    };
    if allowance.expiration_ledger < env.ledger().sequence() || allowance.amount < amount {
        return Err(VaultError::InsufficientAllowance);
    }
    if amount > 0 {
        env.storage().temporary().set(
            &key,
            &AllowanceValue {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}

// === Active index ===

pub fn get_last_active_index(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::LastActiveIndex)
}

pub fn set_last_active_index(env: &Env, index: u32) {
    env.storage()
        .instance()
        .set(&DataKey::LastActiveIndex, &index);
}
