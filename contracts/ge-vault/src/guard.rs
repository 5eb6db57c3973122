use crate::storage::DataKey;
use soroban_sdk::Env;
use vault_types::VaultError;

/// Scoped reentrancy lock held by every mutating entry point.
///
/// Acquiring fails while another frame of this contract holds the lock.
/// The lock is released when the guard is dropped; a failed invocation has
/// its lock write rolled back by the host together with everything else.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, VaultError> {
        let locked: bool = env
            .storage()
            .instance()
            .get(&DataKey::Lock)
            .unwrap_or(false);
        if locked {
            return Err(VaultError::Reentrancy);
        }
        env.storage().instance().set(&DataKey::Lock, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Lock);
    }
}
