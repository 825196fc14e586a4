use anchor_lang::prelude::*;
use pool_factory::PoolParams;

use crate::{
    error::ErrorCode,
    helpers::math::{mul, wide, U256},
};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub asset_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub maturity: i64,
    pub fee_collector: Pubkey,
    pub params: PoolParams,
    pub asset_vault: Pubkey,
    pub collateral_vault: Pubkey,
    pub liquidity_mint: Pubkey,
    pub bond_mint: Pubkey,
    pub insurance_mint: Pubkey,
    pub state: PoolState,
    pub next_position_id: u64,
    pub created_at: i64,
    pub auth_bump: u8,
    pub bump: u8,
}

impl Pool {
    pub fn take_position_id(&mut self) -> Result<u64> {
        let id = self.next_position_id;
        self.next_position_id = id
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(id)
    }
}

/// Reserves and supplies of one pool. Engines read one snapshot and return a
/// new one; the handler stores it only after every transfer succeeded.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, InitSpace, PartialEq, Eq,
)]
pub struct PoolState {
    pub asset_reserve: u64,
    /// Principal capacity.
    pub bond_reserve: u64,
    pub collateral_reserve: u64,
    /// Interest capacity, annualised.
    pub rate_reserve: u128,
    /// Insurance claims still held by the pool.
    pub outstanding_insurance: u64,
    pub liquidity_supply: u64,
    pub bond_supply: u64,
    pub insurance_supply: u64,
}

impl PoolState {
    pub fn is_initialized(&self) -> bool {
        self.liquidity_supply > 0
    }

    /// `asset_reserve * bond_reserve * rate_reserve`.
    pub fn invariant(&self) -> Result<U256> {
        mul(
            mul(wide(self.asset_reserve), wide(self.bond_reserve))?,
            wide(self.rate_reserve),
        )
    }
}
