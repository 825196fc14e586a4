pub use pool_factory::constants::BASE;

/// Liquidity locked forever at genesis; keeps the supply away from zero.
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTH_SEED: &[u8] = b"pool-auth";
pub const ASSET_VAULT_SEED: &[u8] = b"asset-vault";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral-vault";
pub const LIQUIDITY_MINT_SEED: &[u8] = b"liquidity-mint";
pub const BOND_MINT_SEED: &[u8] = b"bond-mint";
pub const INSURANCE_MINT_SEED: &[u8] = b"insurance-mint";
pub const DEBT_SEED: &[u8] = b"debt";
