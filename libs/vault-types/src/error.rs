use soroban_sdk::contracterror;

/// Failure kinds of vault operations.
///
/// Codes are part of the contract ABI and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidTreasury = 3,
    /// Operation attempted while the vault is disabled
    PoolDisabled = 4,
    DepositZero = 5,
    /// Token is neither token0 nor token1 of the vault
    InvalidAsset = 6,
    /// Deposit would push TVL above the cap
    MaxCapReached = 7,
    /// Pushed or shifted range is not contiguous with the ladder end, or is already in it
    RangeOverlap = 8,
    LadderNotInitialized = 9,
    LadderFull = 10,
    InvalidRange = 11,
    /// AMM spot price diverges from the oracle price beyond tolerance
    OracleError = 12,
    InsufficientShares = 13,
    InsufficientBalance = 14,
    /// Range shares needed for a withdrawal are lent out
    InsufficientLiquidity = 15,
    WithdrawZero = 16,
    InvalidFee = 17,
    InvalidAmount = 18,
    SlippageExceeded = 19,
    Reentrancy = 20,
    IndexOutOfBounds = 21,
    /// Deposit would mint no shares, or a first deposit is below the minimum
    InsufficientDeposit = 22,
    InsufficientAllowance = 23,
    /// Allowance expiration is in the past
    InvalidExpiration = 24,
}
