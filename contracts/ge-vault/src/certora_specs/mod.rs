// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the GeVault range-ladder vault.
//
// STRUCTURE:
//
// - fee_specs.rs    : Imbalance fee curve bounds and monotonicity
// - oracle_specs.rs : Spot/oracle agreement guard
// - ladder_specs.rs : Ladder contiguity, active index and neighbor selection
// - share_specs.rs  : Deposit split and pro-rata withdrawal accounting
//
// USAGE:
// - Unit tests: cargo test -p ge-vault
// - Certora build: cargo build --features certora -p ge-vault
// - Verification: certoraSorobanProver ge_vault.conf
//
// ============================================================================

pub mod fee_specs;
pub mod ladder_specs;
pub mod oracle_specs;
pub mod share_specs;
