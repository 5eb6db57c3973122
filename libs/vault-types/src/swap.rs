use soroban_sdk::{contracttype, Address};

/// Parameters for exact input single swap on the DEX router
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    pub sqrt_price_limit_x96: u128,
}
